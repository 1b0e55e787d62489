use crate::canonical::RequestTarget;
use crate::config::Server;
use crate::credentials::AuthCredential;
use crate::error::*;
use crate::headers::Headers;
use crate::sign;
use crate::stamp::RequestStamp;
use std::fmt;
use url::form_urlencoded;
use url::Url;

/// Sent with every request, whatever the body encoding.  Existing servers require exactly this
/// value.
pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";
/// Carries the hex MD5 of the request timestamp on signed requests.
pub const IDENTIFIER_HEADER: &str = "x-identifier";
pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// An HTTP method.  Methods other than GET, POST, PUT and PATCH are passed through with no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Other(String),
}

impl Method {
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Other(m) => m.as_str(),
        }
    }

    /// Whether the encoded payload is sent as the request body.
    pub fn carries_body(&self) -> bool {
        match self {
            Method::Post | Method::Put | Method::Patch => true,
            Method::Get | Method::Other(_) => false,
        }
    }
}

impl From<&str> for Method {
    fn from(method: &str) -> Method {
        let method = method.trim().to_uppercase();
        match method.as_str() {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "PATCH" => Method::Patch,
            _ => Method::Other(method),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encode key/value pairs as `application/x-www-form-urlencoded`, in the order given.
pub fn encode_payload<I, K, V>(pairs: I) -> String
where
    I: IntoIterator,
    I::Item: std::borrow::Borrow<(K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// The path and query of `url` without the leading `/`, as it appears in the request line.
fn wire_path(url: &Url) -> String {
    let path = url.path().strip_prefix('/').unwrap_or_else(|| url.path());
    match url.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    }
}

/// Everything a `Transport` needs to perform one exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    /// The endpoint as sent and signed: relative to the server root, including any query
    pub path: String,
    pub url: Url,
    pub headers: Headers,
    pub body: Option<String>,
}

/// Request represents a single request to the configured server.
///
/// The structure is created using the builder idiom.
///
/// # Examples
///
/// ```
/// use hawk_request::{RequestBuilder, RequestStamp, Server};
/// # fn main() -> hawk_request::Result<()> {
/// let server = Server {
///     protocol: "http".to_string(),
///     host: "example.com".to_string(),
///     port: 80,
/// };
/// let request = RequestBuilder::new(&server, "GET", "v1/users")
///     .payload(&[("page", "2")])
///     .build_at(RequestStamp::from_ts(1353832234))?;
/// assert_eq!(request.url.as_str(), "http://example.com/v1/users?page=2");
/// assert!(request.body.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RequestBuilder<'a> {
    server: &'a Server,
    credential: Option<&'a AuthCredential>,
    method: Method,
    endpoint: &'a str,
    encoded: String,
}

impl<'a> RequestBuilder<'a> {
    /// Create a new request for `endpoint`, a path relative to the server root with no leading
    /// `/`.
    pub fn new<M: Into<Method>>(server: &'a Server, method: M, endpoint: &'a str) -> Self {
        RequestBuilder {
            server,
            credential: None,
            method: method.into(),
            endpoint,
            encoded: String::new(),
        }
    }

    /// Sign the request with this credential.  With `None` the request is sent unauthenticated.
    pub fn credential(mut self, credential: Option<&'a AuthCredential>) -> Self {
        self.credential = credential;
        self
    }

    /// Set the key/value payload.  It is sent as the query string for GET and as the body for
    /// POST, PUT and PATCH.
    pub fn payload<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator,
        I::Item: std::borrow::Borrow<(K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.encoded = encode_payload(pairs);
        self
    }

    /// Build the request, stamping it with the current time.
    pub fn build(&self) -> Result<PreparedRequest> {
        self.build_at(RequestStamp::now())
    }

    /// Build the request with the given stamp.
    ///
    /// A GET with an empty payload gets no trailing `?`: the path is sent and signed as
    /// `endpoint`, not `endpoint?`.  The MAC covers the host and path as `Url` normalizes them,
    /// which is what is sent.
    pub fn build_at(&self, stamp: RequestStamp) -> Result<PreparedRequest> {
        let (path, body) = match self.method {
            Method::Get if !self.encoded.is_empty() => {
                (format!("{}?{}", self.endpoint, self.encoded), None)
            }
            ref m if m.carries_body() => (self.endpoint.to_string(), Some(self.encoded.clone())),
            _ => (self.endpoint.to_string(), None),
        };

        let url = Url::parse(&self.server.url_for(&path))?;
        let path = wire_path(&url);
        let host = url
            .host_str()
            .ok_or_else(|| Error::InvalidUrl(format!("url {} has no host", url)))?;
        let port = url.port_or_known_default().unwrap_or(self.server.port);

        let mut headers = Headers::new();
        headers.set(CONTENT_TYPE_HEADER, CONTENT_TYPE);
        if let Some(credential) = self.credential {
            let target = RequestTarget {
                method: self.method.as_str(),
                endpoint: &path,
                host,
                port,
            };
            let signature = sign::sign(credential, &target, stamp)?;
            headers.set(IDENTIFIER_HEADER, signature.identifier);
            headers.set(AUTHORIZATION_HEADER, signature.header.to_string());
        }

        Ok(PreparedRequest {
            method: self.method.clone(),
            path,
            url,
            headers,
            body,
        })
    }
}
