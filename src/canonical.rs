use crate::stamp::RequestStamp;

/// The first line of every header MAC input.
pub const HEADER_TAG: &str = "hawk.1.header";

/// The parts of a request that are covered by the MAC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestTarget<'a> {
    pub method: &'a str,
    /// Path relative to the server root, without the leading `/` (and including any query)
    pub endpoint: &'a str,
    pub host: &'a str,
    pub port: u16,
}

impl<'a> RequestTarget<'a> {
    /// Build the exact string that is signed for this target at the given stamp.
    ///
    /// The endpoint is used verbatim; any escaping must already have been applied.  The two
    /// trailing empty lines stand for the (unused) payload hash and `ext` fields and must be
    /// present for a Hawk server to reproduce the MAC.
    pub fn canonical_string(&self, stamp: &RequestStamp) -> String {
        format!(
            "{}\n{}\n{}\n{}\n/{}\n{}\n{}\n\n\n",
            HEADER_TAG,
            stamp.ts,
            stamp.nonce,
            self.method.to_uppercase(),
            self.endpoint,
            self.host,
            self.port,
        )
    }
}
