use crate::error::TransportError;
use crate::request::PreparedRequest;

/// Performs the network exchange for a [`PreparedRequest`].
///
/// An implementation returns the complete raw response: the status line, the header lines, a
/// blank line and the body.  It should follow redirects.  Anything that prevents a response from
/// being produced is a `TransportError`; HTTP error statuses are ordinary responses.
///
/// A `Client` may be used from several threads at once, so implementations must be shareable.
pub trait Transport: Send + Sync {
    fn send(&self, request: &PreparedRequest) -> Result<Vec<u8>, TransportError>;
}

impl<F> Transport for F
where
    F: Fn(&PreparedRequest) -> Result<Vec<u8>, TransportError> + Send + Sync,
{
    fn send(&self, request: &PreparedRequest) -> Result<Vec<u8>, TransportError> {
        self(request)
    }
}

#[cfg(feature = "use_reqwest")]
pub use self::reqwest_transport::ReqwestTransport;

#[cfg(feature = "use_reqwest")]
mod reqwest_transport {
    use super::Transport;
    use crate::error::TransportError;
    use crate::request::PreparedRequest;
    use log::debug;
    use reqwest::blocking;
    use reqwest::redirect;

    const MAX_REDIRECTS: usize = 10;

    impl From<reqwest::Error> for TransportError {
        fn from(e: reqwest::Error) -> Self {
            TransportError::new(e.to_string())
        }
    }

    /// A blocking transport built on `reqwest`.  Redirects are followed.
    ///
    /// The raw response is rebuilt from what `reqwest` exposes, so header names come back
    /// lowercased.  Look them up with [`Headers::get_ignore_case`].
    ///
    /// [`Headers::get_ignore_case`]: crate::Headers::get_ignore_case
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: blocking::Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Result<Self, TransportError> {
            let client = blocking::Client::builder()
                .redirect(redirect::Policy::limited(MAX_REDIRECTS))
                .build()?;
            Ok(ReqwestTransport { client })
        }

        /// Use an already-configured client, e.g. one with timeouts or a proxy.
        pub fn with_client(client: blocking::Client) -> Self {
            ReqwestTransport { client }
        }
    }

    impl Transport for ReqwestTransport {
        fn send(&self, request: &PreparedRequest) -> Result<Vec<u8>, TransportError> {
            let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
                .map_err(|e| TransportError::new(e.to_string()))?;

            let mut builder = self.client.request(method, request.url.clone());
            for (name, value) in request.headers.iter() {
                builder = builder.header(name, value);
            }
            if let Some(ref body) = request.body {
                builder = builder.body(body.clone());
            }

            let response = builder.send()?;
            debug!("{} {} -> {}", request.method, response.url(), response.status());

            // Rebuild status line, headers (names already lowercased) and body.
            let status_line = format!("{:?} {}\r\n", response.version(), response.status());
            let mut raw = status_line.into_bytes();
            for (name, value) in response.headers() {
                raw.extend_from_slice(name.as_str().as_bytes());
                raw.extend_from_slice(b": ");
                raw.extend_from_slice(value.as_bytes());
                raw.extend_from_slice(b"\r\n");
            }
            raw.extend_from_slice(b"\r\n");
            raw.extend_from_slice(&response.bytes()?);
            Ok(raw)
        }
    }
}
