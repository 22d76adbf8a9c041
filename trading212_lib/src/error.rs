//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding configuration and input validation failures.
#[derive(Debug)]
pub enum Trading212Error {
    /// An error from the underlying API client.
    Api(trading212_api::Error),
    /// The environment did not describe a usable client.
    Config(String),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl Trading212Error {
    /// The upstream API error, if this is one.
    pub fn api(&self) -> Option<&trading212_api::Error> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Trading212Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for Trading212Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<trading212_api::Error> for Trading212Error {
    fn from(e: trading212_api::Error) -> Self {
        Self::Api(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn wraps_api_errors() {
        let err: Trading212Error = trading212_api::Error::NotFound("gone".into()).into();
        assert!(err.to_string().starts_with("API error: Resource not found"));
        assert!(err.source().is_some());
        assert!(matches!(err.api(), Some(trading212_api::Error::NotFound(_))));
    }

    #[test]
    fn config_and_input_messages() {
        let err = Trading212Error::Config("TRADING212_ENV must be live or demo".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: TRADING212_ENV must be live or demo"
        );
        assert!(err.source().is_none());

        let err = Trading212Error::InvalidInput("empty ticker".into());
        assert_eq!(err.to_string(), "Invalid input: empty ticker");
        assert!(err.api().is_none());
    }
}
