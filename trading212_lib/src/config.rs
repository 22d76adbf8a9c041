//! Client configuration read from environment variables.
//!
//! | Variable | Meaning |
//! |---|---|
//! | `TRADING212_API_KEY` / `TRADING212_API_SECRET` | key/secret pair (Basic auth) |
//! | `TRADING212_TOKEN` | single pre-formed token |
//! | `TRADING212_ENV` | `live` (default) or `demo` |
//! | `TRADING212_BASE_URL` | overrides the environment's base URL |
//! | `TRADING212_MAX_ATTEMPTS` | attempts per request while rate limited (default 3) |

use trading212_api::{Client, Credentials, Environment, RetryPolicy};

use crate::error::Trading212Error;

pub const API_KEY_VAR: &str = "TRADING212_API_KEY";
pub const API_SECRET_VAR: &str = "TRADING212_API_SECRET";
pub const TOKEN_VAR: &str = "TRADING212_TOKEN";
pub const ENV_VAR: &str = "TRADING212_ENV";
pub const BASE_URL_VAR: &str = "TRADING212_BASE_URL";
pub const MAX_ATTEMPTS_VAR: &str = "TRADING212_MAX_ATTEMPTS";

/// Everything needed to build a [`Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub credentials: Credentials,
    pub environment: Environment,
    pub base_url: Option<String>,
    pub retry: RetryPolicy,
}

impl ClientConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            environment: Environment::default(),
            base_url: None,
            retry: RetryPolicy::default(),
        }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, Trading212Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Trading212Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials =
            Credentials::resolve(lookup(API_KEY_VAR), lookup(API_SECRET_VAR), lookup(TOKEN_VAR))
                .map_err(|e| {
                    Trading212Error::Config(format!(
                        "{} (set {} and {}, or {})",
                        e, API_KEY_VAR, API_SECRET_VAR, TOKEN_VAR
                    ))
                })?;

        let environment = match lookup(ENV_VAR).filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .parse::<Environment>()
                .map_err(|e| Trading212Error::Config(format!("{}: {}", ENV_VAR, e)))?,
            None => Environment::default(),
        };

        let base_url = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty());
        let max_attempts = env_u32(&lookup, MAX_ATTEMPTS_VAR, RetryPolicy::default().max_attempts);

        Ok(Self {
            credentials,
            environment,
            base_url,
            retry: RetryPolicy::new(max_attempts),
        })
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// The URL requests will be sent to.
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }

    /// Builds the client. No network call is made.
    pub fn build_client(&self) -> Result<Client, Trading212Error> {
        let base_url = self.effective_base_url();
        tracing::debug!(
            "building {} client for {} (max {} attempts)",
            self.environment,
            base_url,
            self.retry.max_attempts
        );
        let client = Client::with_base_url(base_url, self.credentials.clone())?;
        Ok(client.with_retry_policy(self.retry))
    }
}

fn env_u32<F>(lookup: &F, key: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|val| val.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn token_only_defaults() {
        let cfg = ClientConfig::from_lookup(lookup_from(&[(TOKEN_VAR, "tok")])).unwrap();
        assert_eq!(cfg.credentials, Credentials::token("tok"));
        assert_eq!(cfg.environment, Environment::Live);
        assert_eq!(cfg.retry.max_attempts, 3);
        assert_eq!(cfg.effective_base_url(), trading212_api::LIVE_BASE_URL);
    }

    #[test]
    fn key_pair_with_demo_and_attempts() {
        let cfg = ClientConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "key"),
            (API_SECRET_VAR, "secret"),
            (ENV_VAR, "demo"),
            (MAX_ATTEMPTS_VAR, "5"),
        ]))
        .unwrap();
        assert_eq!(cfg.credentials, Credentials::api_key("key", "secret"));
        assert_eq!(cfg.environment, Environment::Demo);
        assert_eq!(cfg.retry.max_attempts, 5);
        assert_eq!(cfg.effective_base_url(), trading212_api::DEMO_BASE_URL);
    }

    #[test]
    fn base_url_override_wins() {
        let cfg = ClientConfig::from_lookup(lookup_from(&[
            (TOKEN_VAR, "tok"),
            (ENV_VAR, "demo"),
            (BASE_URL_VAR, "http://localhost:8080/api/v0/"),
        ]))
        .unwrap();
        assert_eq!(cfg.effective_base_url(), "http://localhost:8080/api/v0/");
    }

    #[test]
    fn bad_attempts_fall_back_to_default() {
        let cfg = ClientConfig::from_lookup(lookup_from(&[
            (TOKEN_VAR, "tok"),
            (MAX_ATTEMPTS_VAR, "lots"),
        ]))
        .unwrap();
        assert_eq!(cfg.retry.max_attempts, 3);
    }

    #[test]
    fn missing_credentials_is_config_error() {
        let err = ClientConfig::from_lookup(lookup_from(&[])).unwrap_err();
        match err {
            Trading212Error::Config(msg) => assert!(msg.contains(TOKEN_VAR)),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn both_credential_forms_is_config_error() {
        let err = ClientConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "key"),
            (API_SECRET_VAR, "secret"),
            (TOKEN_VAR, "tok"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Trading212Error::Config(_)));
    }

    #[test]
    fn unknown_environment_is_config_error() {
        let err = ClientConfig::from_lookup(lookup_from(&[(TOKEN_VAR, "tok"), (ENV_VAR, "prod")]))
            .unwrap_err();
        match err {
            Trading212Error::Config(msg) => assert!(msg.contains(ENV_VAR)),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn build_client_applies_policy() {
        let cfg = ClientConfig::new(Credentials::token("tok"))
            .with_base_url("http://localhost:1234")
            .with_retry_policy(RetryPolicy::new(7));
        let client = cfg.build_client().unwrap();
        assert_eq!(client.retry_policy().max_attempts, 7);
        assert_eq!(client.base_url().as_str(), "http://localhost:1234/");
    }
}
