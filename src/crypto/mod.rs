//! `hawk-request` computes its HMACs through a `Cryptographer`, so that the backend can be chosen
//! at build time (features `use_ring` and `use_openssl`) or supplied by the application.
//!
//! With neither feature enabled, call [`set_cryptographer`] before signing any request.

use failure::Fail;

mod holder;
pub(crate) use holder::get_cryptographer;
pub use holder::{set_boxed_cryptographer, set_cryptographer, SetCryptographerError};

#[cfg(feature = "use_openssl")]
pub mod openssl;
#[cfg(feature = "use_ring")]
pub mod ring;

#[derive(Fail, Debug)]
pub enum CryptoError {
    #[fail(display = "{}", _0)]
    Other(#[fail(cause)] failure::Error),
}

/// A keyed HMAC-SHA256 instance.
pub trait HmacKey: Send + Sync {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// The cryptographic operations needed to sign and validate requests.
pub trait Cryptographer: Send + Sync + 'static {
    fn new_key(&self, key: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError>;
    fn constant_time_compare(&self, a: &[u8], b: &[u8]) -> bool;
}
