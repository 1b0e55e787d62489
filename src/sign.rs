use crate::canonical::RequestTarget;
use crate::credentials::AuthCredential;
use crate::crypto;
use crate::error::*;
use crate::header::AuthHeader;
use crate::stamp::RequestStamp;
use log::trace;

/// The result of signing one request: the `Authorization` header and the value for the
/// correlation identifier header.  Both derive from the same `RequestStamp`.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub header: AuthHeader,
    pub identifier: String,
}

/// Compute the MAC over a canonical string with the credential's secret key.
pub fn make_mac(credential: &AuthCredential, canonical: &str) -> Result<Vec<u8>> {
    let key = credential.key()?;
    Ok(key.sign(canonical.as_bytes())?)
}

/// The correlation identifier: the hex MD5 digest of the decimal timestamp.
pub fn identifier(stamp: &RequestStamp) -> String {
    format!("{:x}", md5::compute(stamp.ts.to_string()))
}

/// Sign a request target at the given stamp.
pub fn sign(
    credential: &AuthCredential,
    target: &RequestTarget,
    stamp: RequestStamp,
) -> Result<Signature> {
    let canonical = target.canonical_string(&stamp);
    trace!("hawk mac input: {:?}", canonical);
    let mac = make_mac(credential, &canonical)?;
    Ok(Signature {
        header: AuthHeader::new(credential.access_key.as_str(), stamp, mac)?,
        identifier: identifier(&stamp),
    })
}

/// Recompute the MAC for `header` against `target`, the way a receiving server would, and compare
/// it in constant time.  Only the MAC is checked; the timestamp is not compared to the clock.
pub fn validate_mac(
    header: &AuthHeader,
    credential: &AuthCredential,
    target: &RequestTarget,
) -> Result<bool> {
    if header.id != credential.access_key {
        return Ok(false);
    }
    let expected = make_mac(credential, &target.canonical_string(&header.stamp()))?;
    Ok(crypto::get_cryptographer().constant_time_compare(&expected, &header.mac))
}
