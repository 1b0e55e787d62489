use crate::crypto::{self, HmacKey};
use crate::error::*;
use serde::Deserialize;

/// Hawk credentials: an access key (sent as the header `id`) and the secret key used for the
/// HMAC.  The digest algorithm is always SHA-256.
#[derive(Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuthCredential {
    pub access_key: String,
    pub secret_key: String,
}

impl AuthCredential {
    pub fn new<S, T>(access_key: S, secret_key: T) -> AuthCredential
    where
        S: Into<String>,
        T: Into<String>,
    {
        AuthCredential {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// The access key is written into a quoted header attribute and cannot contain `"`.
    pub(crate) fn check(&self) -> Result<()> {
        if self.access_key.contains('"') {
            return Err(Error::Config(
                "auth accessKey cannot contain `\"`".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn key(&self) -> Result<Box<dyn HmacKey>> {
        Ok(crypto::get_cryptographer().new_key(self.secret_key.as_bytes())?)
    }
}

// Keep the secret out of logs and panic messages.
impl std::fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("AuthCredential")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn debug_redacts_secret() {
        let cred = AuthCredential::new("my-id", "hunter2");
        let dbg = format!("{:?}", cred);
        assert!(dbg.contains("my-id"));
        assert!(!dbg.contains("hunter2"));
    }

    #[test]
    fn quote_in_access_key() {
        assert!(AuthCredential::new("a\"b", "k").check().is_err());
        assert!(AuthCredential::new("ab", "k").check().is_ok());
    }

    #[test]
    fn deserialize() {
        let cred: AuthCredential =
            serde_json::from_str(r#"{"accessKey": "me", "secretKey": "s3cr3t"}"#).unwrap();
        assert_eq!(cred, AuthCredential::new("me", "s3cr3t"));
    }
}
