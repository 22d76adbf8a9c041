//! Authentication modes accepted by the Trading 212 API.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::HeaderValue;

use crate::Error;

/// Credentials attached to every request as the `Authorization` header.
///
/// Trading 212 has issued two kinds of keys over time: a key/secret pair sent
/// as HTTP Basic auth, and a single pre-formed token sent verbatim. Both are
/// supported; exactly one must be supplied.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// API key and secret, sent as `Basic base64(key:secret)`.
    ApiKey { key: String, secret: String },
    /// A token used as the header value unchanged.
    Token(String),
}

impl Credentials {
    pub fn api_key(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::ApiKey {
            key: key.into(),
            secret: secret.into(),
        }
    }

    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Picks the authentication mode from optional parts, e.g. environment
    /// variables. Blank values count as absent.
    ///
    /// Fails if neither mode is complete, if both are supplied, or if only
    /// half of the key/secret pair is present.
    pub fn resolve(
        api_key: Option<String>,
        api_secret: Option<String>,
        token: Option<String>,
    ) -> Result<Self, Error> {
        let api_key = non_blank(api_key);
        let api_secret = non_blank(api_secret);
        let token = non_blank(token);

        let pair_supplied = api_key.is_some() || api_secret.is_some();
        if pair_supplied && token.is_some() {
            return Err(Error::ConflictingCredentials);
        }

        match (api_key, api_secret, token) {
            (Some(key), Some(secret), None) => Ok(Self::ApiKey { key, secret }),
            (None, None, Some(token)) => Ok(Self::Token(token)),
            (Some(_), None, None) => Err(Error::InvalidCredentials(
                "API key supplied without a secret".to_string(),
            )),
            (None, Some(_), None) => Err(Error::InvalidCredentials(
                "API secret supplied without a key".to_string(),
            )),
            _ => Err(Error::MissingCredentials),
        }
    }

    /// Builds the `Authorization` header value, marked sensitive.
    pub(crate) fn authorization(&self) -> Result<HeaderValue, Error> {
        let raw = match self {
            Self::ApiKey { key, secret } => {
                if key.trim().is_empty() || secret.trim().is_empty() {
                    return Err(Error::MissingCredentials);
                }
                format!("Basic {}", STANDARD.encode(format!("{}:{}", key, secret)))
            }
            Self::Token(token) => {
                if token.trim().is_empty() {
                    return Err(Error::MissingCredentials);
                }
                token.clone()
            }
        };
        let mut value = HeaderValue::from_str(&raw).map_err(|_| {
            Error::InvalidCredentials("credentials contain characters not allowed in a header".to_string())
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey { key, .. } => f
                .debug_struct("ApiKey")
                .field("key", key)
                .field("secret", &"<redacted>")
                .finish(),
            Self::Token(_) => f.debug_tuple("Token").field(&"<redacted>").finish(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_auth_header() {
        let creds = Credentials::api_key("key", "secret");
        let header = creds.authorization().unwrap();
        // base64("key:secret")
        assert_eq!(header.to_str().unwrap(), "Basic a2V5OnNlY3JldA==");
        assert!(header.is_sensitive());
    }

    #[test]
    fn token_is_sent_verbatim() {
        let creds = Credentials::token("21002ZZabcdef");
        let header = creds.authorization().unwrap();
        assert_eq!(header.to_str().unwrap(), "21002ZZabcdef");
    }

    #[test]
    fn empty_credentials_are_rejected() {
        assert!(matches!(
            Credentials::token("  ").authorization(),
            Err(Error::MissingCredentials)
        ));
        assert!(matches!(
            Credentials::api_key("key", "").authorization(),
            Err(Error::MissingCredentials)
        ));
    }

    #[test]
    fn header_unsafe_token_is_invalid() {
        assert!(matches!(
            Credentials::token("line\nbreak").authorization(),
            Err(Error::InvalidCredentials(_))
        ));
    }

    #[test]
    fn resolve_picks_one_mode() {
        let pair = Credentials::resolve(Some("k".into()), Some("s".into()), None).unwrap();
        assert_eq!(pair, Credentials::api_key("k", "s"));

        let token = Credentials::resolve(None, None, Some("t".into())).unwrap();
        assert_eq!(token, Credentials::token("t"));

        // blank values are ignored
        let token = Credentials::resolve(Some("".into()), None, Some("t".into())).unwrap();
        assert_eq!(token, Credentials::token("t"));
    }

    #[test]
    fn resolve_rejects_neither_and_both() {
        assert!(matches!(
            Credentials::resolve(None, None, None),
            Err(Error::MissingCredentials)
        ));
        assert!(matches!(
            Credentials::resolve(Some("k".into()), Some("s".into()), Some("t".into())),
            Err(Error::ConflictingCredentials)
        ));
        assert!(matches!(
            Credentials::resolve(Some("k".into()), None, Some("t".into())),
            Err(Error::ConflictingCredentials)
        ));
    }

    #[test]
    fn resolve_rejects_half_a_pair() {
        assert!(matches!(
            Credentials::resolve(Some("k".into()), None, None),
            Err(Error::InvalidCredentials(_))
        ));
        assert!(matches!(
            Credentials::resolve(None, Some("s".into()), None),
            Err(Error::InvalidCredentials(_))
        ));
    }

    #[test]
    fn debug_redacts_secrets() {
        let rendered = format!("{:?}", Credentials::api_key("key", "hunter2"));
        assert!(!rendered.contains("hunter2"));
        let rendered = format!("{:?}", Credentials::token("tok-123"));
        assert!(!rendered.contains("tok-123"));
    }
}
