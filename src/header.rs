use crate::b64;
use crate::error::*;
use crate::stamp::RequestStamp;
use std::fmt;
use std::str::FromStr;

/// Representation of a Hawk `Authorization` header value, including the `Hawk ` prefix.
///
/// Only the `id`, `ts`, `nonce` and `mac` attributes are supported.
#[derive(Clone, PartialEq, Debug)]
pub struct AuthHeader {
    pub id: String,
    pub ts: u64,
    pub nonce: u64,
    pub mac: Vec<u8>,
}

impl AuthHeader {
    /// Create a new AuthHeader.
    ///
    /// The id cannot contain the character `"`; such an id is an error.
    pub fn new<S>(id: S, stamp: RequestStamp, mac: Vec<u8>) -> Result<AuthHeader>
    where
        S: Into<String>,
    {
        let id = id.into();
        if id.contains('"') {
            return Err(Error::InvalidHeader(
                "Hawk header id cannot contain `\"`".to_string(),
            ));
        }
        Ok(AuthHeader {
            id,
            ts: stamp.ts,
            nonce: stamp.nonce,
            mac,
        })
    }

    pub fn stamp(&self) -> RequestStamp {
        RequestStamp {
            ts: self.ts,
            nonce: self.nonce,
        }
    }
}

impl fmt::Display for AuthHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Hawk id=\"{}\", ts=\"{}\", nonce=\"{}\", mac=\"{}\"",
            self.id,
            self.ts,
            self.nonce,
            b64::encode(&self.mac),
        )
    }
}

impl FromStr for AuthHeader {
    type Err = Error;
    fn from_str(s: &str) -> Result<AuthHeader> {
        // Check that it starts with "Hawk " (space not optional)
        match s.get(..5) {
            Some(scheme) if scheme.eq_ignore_ascii_case("hawk ") => {}
            _ => return Err(Error::InvalidHeader("not a Hawk header".to_string())),
        }

        let mut p = &s[5..];

        let mut id: Option<&str> = None;
        let mut ts: Option<u64> = None;
        let mut nonce: Option<u64> = None;
        let mut mac: Option<Vec<u8>> = None;

        while !p.is_empty() {
            // Skip whitespace and commas used as separators
            p = p.trim_start_matches(|c: char| c == ',' || c.is_whitespace());
            if p.is_empty() {
                break;
            }
            // Find first '=' which delimits attribute name from value
            let assign = p
                .find('=')
                .ok_or_else(|| Error::InvalidHeader(format!("expected '=' in {:?}", p)))?;
            let attr = p[..assign].trim();
            p = p[assign + 1..].trim_start();
            if !p.starts_with('"') {
                return Err(Error::InvalidHeader(format!(
                    "value of {} is not quoted",
                    attr
                )));
            }
            p = &p[1..];
            // Hawk does not allow backslash escapes, so a value ends at the next quote.
            let end = p
                .find('"')
                .ok_or_else(|| Error::InvalidHeader(format!("unterminated value for {}", attr)))?;
            let val = &p[..end];
            match attr {
                "id" => id = Some(val),
                "ts" => ts = Some(parse_number(attr, val)?),
                "nonce" => nonce = Some(parse_number(attr, val)?),
                "mac" => {
                    mac = Some(b64::decode(val).map_err(|e| {
                        Error::InvalidHeader(format!("invalid mac: {}", e))
                    })?)
                }
                _ => {
                    return Err(Error::InvalidHeader(format!(
                        "unknown attribute {}",
                        attr
                    )))
                }
            };
            p = &p[end + 1..];
        }

        match (id, ts, nonce, mac) {
            (Some(id), Some(ts), Some(nonce), Some(mac)) => Ok(AuthHeader {
                id: id.to_string(),
                ts,
                nonce,
                mac,
            }),
            _ => Err(Error::InvalidHeader(
                "missing id, ts, nonce or mac".to_string(),
            )),
        }
    }
}

fn parse_number(attr: &str, val: &str) -> Result<u64> {
    u64::from_str(val).map_err(|_| Error::InvalidHeader(format!("invalid {}: {:?}", attr, val)))
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mac() -> Vec<u8> {
        vec![
            8, 35, 182, 149, 42, 111, 33, 192, 19, 22, 94, 43, 118, 176, 65, 69, 86, 4, 156, 184,
            85, 107, 249, 242, 172, 200, 66, 209, 57, 63, 38, 83,
        ]
    }

    #[test]
    fn illegal_id() {
        assert!(AuthHeader::new("abc\"def", RequestStamp::from_ts(1234), vec![]).is_err());
    }

    #[test]
    fn to_str() {
        let h = AuthHeader::new("dh37fgj492je", RequestStamp::from_ts(1353832234), mac()).unwrap();
        assert_eq!(
            h.to_string(),
            "Hawk id=\"dh37fgj492je\", ts=\"1353832234\", nonce=\"30634\", \
             mac=\"CCO2lSpvIcATFl4rdrBBRVYEnLhVa/nyrMhC0Tk/JlM=\""
        );
    }

    #[test]
    fn from_str() {
        let h = AuthHeader::from_str(
            "Hawk id=\"dh37fgj492je\", ts=\"1353832234\", nonce=\"30634\", \
             mac=\"CCO2lSpvIcATFl4rdrBBRVYEnLhVa/nyrMhC0Tk/JlM=\"",
        )
        .unwrap();
        assert_eq!(h.id, "dh37fgj492je");
        assert_eq!(h.ts, 1353832234);
        assert_eq!(h.nonce, 30634);
        assert_eq!(h.mac, mac());
    }

    #[test]
    fn from_str_messy() {
        let h = AuthHeader::from_str(
            "hawk , mac=\"CCO2lSpvIcATFl4rdrBBRVYEnLhVa/nyrMhC0Tk/JlM=\",, nonce  =  \"1\" , \
             ts=\"2\", id=\"x\"  ",
        )
        .unwrap();
        assert_eq!(h.id, "x");
        assert_eq!(h.stamp(), RequestStamp { ts: 2, nonce: 1 });
    }

    #[test]
    fn from_str_missing_mac() {
        assert!(AuthHeader::from_str("Hawk id=\"x\", ts=\"1\", nonce=\"1\"").is_err());
    }

    #[test]
    fn from_str_unknown_attribute() {
        assert!(AuthHeader::from_str(
            "Hawk id=\"x\", ts=\"1\", nonce=\"1\", mac=\"AA==\", ext=\"y\""
        )
        .is_err());
    }

    #[test]
    fn from_str_wrong_scheme() {
        assert!(AuthHeader::from_str("Basic dXNlcjpwYXNz").is_err());
    }

    #[test]
    fn from_str_bad_ts() {
        assert!(
            AuthHeader::from_str("Hawk id=\"x\", ts=\"soon\", nonce=\"1\", mac=\"AA==\"").is_err()
        );
    }

    #[test]
    fn round_trip() {
        let h = AuthHeader::new("my-id", RequestStamp::from_ts(1500000000), mac()).unwrap();
        let h2 = AuthHeader::from_str(&h.to_string()).unwrap();
        assert_eq!(h2, h);
    }
}
