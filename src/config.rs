use crate::credentials::AuthCredential;
use crate::error::*;
use serde::{de, Deserialize, Deserializer};
use std::fmt;

pub const DEFAULT_PROTOCOL: &str = "http";
pub const DEFAULT_PORT: u16 = 80;

/// Configuration for a [`Client`](crate::Client).
///
/// Every field but `server` has a default.  A config can be built in code:
///
/// ```
/// use hawk_request::{AuthCredential, ClientConfig};
/// let config = ClientConfig::new()
///     .server("api.example.com")
///     .port(8080)
///     .auth(AuthCredential::new("my-id", "my-secret"));
/// ```
///
/// or deserialized from an options object such as
/// `{"server": "api.example.com", "port": "8080", "auth": {"accessKey": "..", "secretKey": ".."}}`.
/// Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    #[serde(default = "default_protocol")]
    pub protocol: String,
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default = "default_port", deserialize_with = "port_from_number_or_string")]
    pub port: u16,
    #[serde(default)]
    pub auth: Option<AuthCredential>,
}

fn default_protocol() -> String {
    DEFAULT_PROTOCOL.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            protocol: default_protocol(),
            server: None,
            port: DEFAULT_PORT,
            auth: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        ClientConfig::default()
    }

    pub fn protocol<S: Into<String>>(mut self, protocol: S) -> Self {
        self.protocol = protocol.into();
        self
    }

    pub fn server<S: Into<String>>(mut self, server: S) -> Self {
        self.server = Some(server.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn auth(mut self, auth: AuthCredential) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Parse a JSON options object.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Check the configuration and split it into the server location and the credential.
    pub(crate) fn validate(self) -> Result<(Server, Option<AuthCredential>)> {
        let host = match self.server {
            Some(ref s) if !s.trim().is_empty() => s.trim().to_string(),
            _ => return Err(Error::Config("Server required".to_string())),
        };
        if self.protocol.is_empty() {
            return Err(Error::Config("protocol cannot be empty".to_string()));
        }
        if let Some(ref auth) = self.auth {
            auth.check()?;
        }
        Ok((
            Server {
                protocol: self.protocol,
                host,
                port: self.port,
            },
            self.auth,
        ))
    }
}

/// A validated server location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub protocol: String,
    pub host: String,
    pub port: u16,
}

impl Server {
    /// `protocol://host:port/path`; `path` is taken as-is.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}://{}:{}/{}", self.protocol, self.host, self.port, path)
    }
}

fn port_from_number_or_string<'de, D>(deserializer: D) -> std::result::Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    struct PortVisitor;

    impl<'de> de::Visitor<'de> for PortVisitor {
        type Value = u16;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a port number or numeric string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<u16, E> {
            if v > u64::from(u16::max_value()) {
                return Err(E::custom(format!("port {} out of range", v)));
            }
            Ok(v as u16)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<u16, E> {
            if v < 0 {
                return Err(E::custom(format!("port {} out of range", v)));
            }
            self.visit_u64(v as u64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<u16, E> {
            v.trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid port {:?}", v)))
        }
    }

    deserializer.deserialize_any(PortVisitor)
}
