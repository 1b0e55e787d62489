use crate::crypto::CryptoError;
use failure::Fail;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Fail, Debug)]
pub enum Error {
    #[fail(display = "Invalid client configuration: {}", _0)]
    Config(String),

    #[fail(display = "Invalid Hawk header: {}", _0)]
    InvalidHeader(String),

    #[fail(display = "Invalid url: {}", _0)]
    InvalidUrl(String),

    #[fail(display = "{}", _0)]
    Transport(#[fail(cause)] TransportError),

    #[fail(display = "Malformed response: no blank line between headers and body")]
    MalformedResponse,

    #[fail(display = "{}", _0)]
    Crypto(#[fail(cause)] CryptoError),
}

/// The transport produced no usable result.  The detail is whatever the underlying network layer
/// reported.
#[derive(Fail, Debug)]
#[fail(display = "Transport error: {}", detail)]
pub struct TransportError {
    detail: String,
}

impl TransportError {
    pub fn new<S: Into<String>>(detail: S) -> Self {
        TransportError {
            detail: detail.into(),
        }
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Error::Transport(e)
    }
}

impl From<CryptoError> for Error {
    fn from(e: CryptoError) -> Self {
        Error::Crypto(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::InvalidUrl(e.to_string())
    }
}
