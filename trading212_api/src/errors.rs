//! Error types for the API client.

use std::time::Duration;

/// Errors that can occur when constructing the client or making API requests.
///
/// Every non-200 response maps to exactly one variant (see [`crate::classify`]).
/// Only [`Error::RateLimited`] is retried; [`Error::AttemptsExceeded`] is what
/// callers see once the retry budget is spent.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// HTTP 400.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// HTTP 401.
    #[error("Bad API key: {0}")]
    BadApiKey(String),
    /// HTTP 403, the key lacks the scope needed for this endpoint.
    #[error("Missing scope for API key: {0}")]
    ScopeError(String),
    /// HTTP 404.
    #[error("Resource not found: {0}")]
    NotFound(String),
    /// HTTP 408, or the 30-second client-side request timeout elapsed.
    #[error("Request timed out: {0}")]
    Timeout(String),
    /// HTTP 429 with the delay the server asked us to wait.
    #[error("Rate limited, retry after {}s", .retry_after.as_secs_f64())]
    RateLimited { retry_after: Duration, body: String },
    /// Every allowed attempt was rate limited.
    #[error("Request still rate limited after {attempts} attempts")]
    AttemptsExceeded { attempts: u32 },
    /// Any other status code, with a body snippet.
    #[error("Unexpected error {status}: {body}")]
    HttpStatus { status: u16, body: String },
    /// A 200 response whose body was not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// Transport failure (connection refused, TLS, body read).
    #[error("Network error")]
    Network(#[from] reqwest::Error),
    #[error("No credentials supplied: provide an API key and secret, or a token")]
    MissingCredentials,
    #[error("Both an API key/secret pair and a token were supplied")]
    ConflictingCredentials,
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Unknown environment '{0}', expected live or demo")]
    UnknownEnvironment(String),
}

impl Error {
    /// Whether the retry controller may try the request again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// The HTTP status this error was classified from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidParameter(_) => Some(400),
            Self::BadApiKey(_) => Some(401),
            Self::ScopeError(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rate_limited_is_retryable() {
        let limited = Error::RateLimited {
            retry_after: Duration::from_secs(5),
            body: String::new(),
        };
        assert!(limited.is_retryable());
        assert!(!Error::AttemptsExceeded { attempts: 3 }.is_retryable());
        assert!(!Error::Timeout("slow".into()).is_retryable());
        assert!(!Error::HttpStatus {
            status: 503,
            body: String::new()
        }
        .is_retryable());
    }

    #[test]
    fn display_messages() {
        let err = Error::RateLimited {
            retry_after: Duration::from_secs(7),
            body: String::new(),
        };
        assert_eq!(err.to_string(), "Rate limited, retry after 7s");

        let err = Error::AttemptsExceeded { attempts: 3 };
        assert!(err.to_string().contains("3 attempts"));

        let err = Error::HttpStatus {
            status: 502,
            body: "bad gateway".into(),
        };
        assert_eq!(err.to_string(), "Unexpected error 502: bad gateway");
    }

    #[test]
    fn status_of_classified_errors() {
        assert_eq!(Error::NotFound(String::new()).status(), Some(404));
        assert_eq!(Error::ScopeError(String::new()).status(), Some(403));
        assert_eq!(Error::Parse(String::new()).status(), None);
        assert_eq!(Error::AttemptsExceeded { attempts: 1 }.status(), None);
        assert_eq!(Error::UnknownEnvironment("prod".into()).status(), None);
    }
}
