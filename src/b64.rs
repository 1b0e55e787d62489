//! This module contains basic base64 functionality as used in Hawk headers.

/// Encode with the standard alphabet, including padding.
pub(crate) fn encode(bytes: &[u8]) -> String {
    base64::encode_config(bytes, base64::STANDARD)
}

/// Decode a standard-alphabet, padded value.
pub(crate) fn decode(value: &str) -> Result<Vec<u8>, base64::DecodeError> {
    base64::decode_config(value, base64::STANDARD)
}
