use crate::error::*;
use crate::headers::Headers;
use serde_json::Value;

const SEPARATOR: &[u8] = b"\r\n\r\n";

/// A response, split into its header and body blocks and decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResponse {
    /// The first line of the header block, if it is an HTTP status line
    pub status_line: Option<String>,
    /// Well-formed `Name: value` lines, in order; a repeated name keeps its last value
    pub headers: Headers,
    /// The body decoded as JSON, or `Value::Null` if it is empty or not JSON
    pub body: Value,
    /// The undecoded body text
    pub raw_body: String,
}

impl ParsedResponse {
    /// The status code from the status line, if there is one.
    pub fn status(&self) -> Option<u16> {
        self.status_line
            .as_ref()?
            .split_whitespace()
            .nth(1)?
            .parse()
            .ok()
    }
}

/// Split raw response bytes at the first blank line and decode both halves.
///
/// Only a missing separator is an error; bad header lines are skipped and an undecodable body
/// becomes `Value::Null`.
pub fn parse_response(raw: &[u8]) -> Result<ParsedResponse> {
    let split = raw
        .windows(SEPARATOR.len())
        .position(|w| w == SEPARATOR)
        .ok_or(Error::MalformedResponse)?;
    let header_block = String::from_utf8_lossy(&raw[..split]);
    let body_block = String::from_utf8_lossy(&raw[split + SEPARATOR.len()..]);

    Ok(ParsedResponse {
        status_line: parse_status_line(&header_block),
        headers: parse_headers(&header_block),
        body: parse_body(&body_block),
        raw_body: body_block.into_owned(),
    })
}

fn parse_status_line(header_block: &str) -> Option<String> {
    let first = header_block.lines().next()?.trim();
    if first.starts_with("HTTP/") {
        Some(first.to_string())
    } else {
        None
    }
}

/// Each line is split at its first colon and both sides trimmed.  Lines with an empty name or an
/// empty value (including the status line, which has no colon) produce no entry.
pub fn parse_headers(header_block: &str) -> Headers {
    let mut headers = Headers::new();
    for line in header_block.split('\n') {
        let (key, value) = match line.find(':') {
            Some(pos) => (line[..pos].trim(), line[pos + 1..].trim()),
            None => continue,
        };
        if !key.is_empty() && !value.is_empty() {
            headers.set(key, value);
        }
    }
    headers
}

pub fn parse_body(body_block: &str) -> Value {
    serde_json::from_str(body_block).unwrap_or(Value::Null)
}
