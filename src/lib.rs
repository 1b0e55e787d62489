//! This crate provides a small HTTP client that authenticates its requests with Hawk headers
//! and parses the raw response into headers and a JSON body.
//!
//! Requests are signed with the `hawk.1.header` MAC over the method, path, host and port.  The
//! timestamp is the current UTC time and the nonce is the number of seconds since the last UTC
//! midnight.  Signed requests also carry an `x-identifier` header, the hex MD5 of the timestamp.
//!
//! The network exchange itself is delegated to a [`Transport`].  With the default `use_reqwest`
//! feature, [`Client::new`] uses a blocking `reqwest` client.
//!
//! # Examples
//!
//! ## Sending a request
//!
//! ```no_run
//! use hawk_request::{AuthCredential, Client, ClientConfig};
//!
//! # fn main() -> hawk_request::Result<()> {
//! let config = ClientConfig::new()
//!     .server("api.example.com")
//!     .port(8000)
//!     .auth(AuthCredential::new("my-access-key", "my-secret-key"));
//! let client = Client::new(config)?;
//!
//! let response = client.request("GET", "v1/bookings", &[("ref", "ABC123")])?;
//! println!("status: {:?}", response.status());
//! // the default transport lowercases header names
//! println!("content-type: {:?}", response.headers.get_ignore_case("Content-Type"));
//! println!("body: {}", response.body);
//! # Ok(())
//! # }
//! ```
//!
//! ## Signing without sending
//!
//! ```
//! use hawk_request::{sign, AuthCredential, RequestStamp, RequestTarget};
//!
//! let credential = AuthCredential::new("my-access-key", "my-secret-key");
//! let target = RequestTarget {
//!     method: "POST",
//!     endpoint: "v1/bookings",
//!     host: "api.example.com",
//!     port: 443,
//! };
//! let signature = sign::sign(&credential, &target, RequestStamp::now()).unwrap();
//! let header = signature.header.to_string();
//! assert!(header.starts_with("Hawk id=\"my-access-key\", ts=\""));
//! assert!(header.contains("mac="));
//! ```
//!
//! ## Crypto backends
//!
//! HMACs are computed with `ring` by default.  Build with `default-features = false` and
//! `features = ["use_openssl"]` to use OpenSSL instead, or install your own
//! [`crypto::Cryptographer`] with [`crypto::set_cryptographer`].

mod b64;
mod canonical;
mod client;
mod config;
mod credentials;
pub mod crypto;
mod error;
mod header;
mod headers;
mod request;
mod response;
pub mod sign;
mod stamp;
mod transport;

pub use crate::canonical::{RequestTarget, HEADER_TAG};
pub use crate::client::Client;
pub use crate::config::{ClientConfig, Server, DEFAULT_PORT, DEFAULT_PROTOCOL};
pub use crate::credentials::AuthCredential;
pub use crate::error::*;
pub use crate::header::AuthHeader;
pub use crate::headers::Headers;
pub use crate::request::{
    encode_payload, Method, PreparedRequest, RequestBuilder, AUTHORIZATION_HEADER, CONTENT_TYPE,
    CONTENT_TYPE_HEADER, IDENTIFIER_HEADER,
};
pub use crate::response::{parse_body, parse_headers, parse_response, ParsedResponse};
pub use crate::stamp::RequestStamp;
#[cfg(feature = "use_reqwest")]
pub use crate::transport::ReqwestTransport;
pub use crate::transport::Transport;

/// The decoded body of a response.
pub use serde_json::Value;
