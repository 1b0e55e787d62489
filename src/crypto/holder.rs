use super::Cryptographer;
use failure::Fail;
use once_cell::sync::OnceCell;

static BACKEND: OnceCell<&'static dyn Cryptographer> = OnceCell::new();

/// Returned when a backend is installed after one is already in place, either by an earlier
/// call or because a request was signed with a built-in backend.
#[derive(Debug, Fail)]
#[fail(display = "a cryptographer is already installed")]
pub struct SetCryptographerError(());

/// Install an owned backend.  The box is leaked, since the backend lives for the rest of the
/// process.
pub fn set_boxed_cryptographer(c: Box<dyn Cryptographer>) -> Result<(), SetCryptographerError> {
    set_cryptographer(Box::leak(c))
}

/// Install the backend used to compute and compare request MACs.
///
/// The first backend wins.  With `use_ring` or `use_openssl` enabled, signing a request installs
/// the built-in backend, so a custom one has to be installed before the first request.
pub fn set_cryptographer(c: &'static dyn Cryptographer) -> Result<(), SetCryptographerError> {
    BACKEND.set(c).map_err(|_| SetCryptographerError(()))
}

// Panics if no backend feature is enabled and nothing was installed.
pub(crate) fn get_cryptographer() -> &'static dyn Cryptographer {
    install_default();
    BACKEND
        .get()
        .copied()
        .expect("no cryptographer installed for `hawk-request`")
}

#[cfg(feature = "use_ring")]
#[inline]
fn install_default() {
    let _ = set_cryptographer(&super::ring::RingCryptographer);
}

#[cfg(all(feature = "use_openssl", not(feature = "use_ring")))]
#[inline]
fn install_default() {
    let _ = set_cryptographer(&super::openssl::OpensslCryptographer);
}

#[cfg(not(any(feature = "use_openssl", feature = "use_ring")))]
#[inline]
fn install_default() {}
