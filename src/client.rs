use crate::config::{ClientConfig, Server};
use crate::credentials::AuthCredential;
use crate::error::*;
use crate::request::RequestBuilder;
use crate::response::{parse_response, ParsedResponse};
use crate::stamp::RequestStamp;
use crate::transport::Transport;
use log::debug;

/// A client for one server, optionally signing every request with Hawk credentials.
///
/// The configuration is fixed at construction.  Each call to [`request`](Client::request) is
/// independent: build, send, parse.
#[derive(Debug)]
pub struct Client<T> {
    server: Server,
    auth: Option<AuthCredential>,
    transport: T,
}

#[cfg(feature = "use_reqwest")]
impl Client<crate::transport::ReqwestTransport> {
    /// Create a client using the default `reqwest` transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let (server, auth) = config.validate()?;
        let transport = crate::transport::ReqwestTransport::new()?;
        Ok(Client {
            server,
            auth,
            transport,
        })
    }
}

impl<T: Transport> Client<T> {
    /// Create a client that sends its requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        let (server, auth) = config.validate()?;
        Ok(Client {
            server,
            auth,
            transport,
        })
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request to `endpoint` (relative to the server root, no leading `/`) with the given
    /// key/value payload, and parse the response.
    ///
    /// HTTP error statuses are not errors here; inspect [`ParsedResponse::status`].
    pub fn request<I, K, V>(
        &self,
        method: &str,
        endpoint: &str,
        payload: I,
    ) -> Result<ParsedResponse>
    where
        I: IntoIterator,
        I::Item: std::borrow::Borrow<(K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.request_at(method, endpoint, payload, RequestStamp::now())
    }

    /// Like `request`, but signing with the given stamp instead of the current time.
    pub fn request_at<I, K, V>(
        &self,
        method: &str,
        endpoint: &str,
        payload: I,
        stamp: RequestStamp,
    ) -> Result<ParsedResponse>
    where
        I: IntoIterator,
        I::Item: std::borrow::Borrow<(K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let prepared = RequestBuilder::new(&self.server, method, endpoint)
            .credential(self.auth.as_ref())
            .payload(payload)
            .build_at(stamp)?;
        debug!(
            "sending {} {} ({})",
            prepared.method,
            prepared.url,
            if self.auth.is_some() { "signed" } else { "unsigned" }
        );

        let raw = self.transport.send(&prepared)?;
        if raw.is_empty() {
            return Err(TransportError::new("empty response").into());
        }
        debug!("received {} bytes from {}", raw.len(), prepared.url);

        parse_response(&raw)
    }
}
