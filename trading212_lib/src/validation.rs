//! Validation for identifiers typed on the command line.

use crate::error::Trading212Error;

pub const MAX_TICKER_LENGTH: usize = 32;

/// Validates a Trading 212 ticker such as `AAPL_US_EQ` or `VUSAl_EQ`.
///
/// Case is preserved: lowercase letters are significant in some tickers.
pub fn validate_ticker(input: &str) -> Result<String, Trading212Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Trading212Error::InvalidInput(
            "ticker must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_TICKER_LENGTH {
        return Err(Trading212Error::InvalidInput(format!(
            "ticker too long (max {} characters)",
            MAX_TICKER_LENGTH
        )));
    }
    if let Some(bad) = trimmed
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '.' || *c == '-'))
    {
        return Err(Trading212Error::InvalidInput(format!(
            "ticker contains invalid character '{}'",
            bad
        )));
    }
    if trimmed.chars().all(|c| c == '.') {
        return Err(Trading212Error::InvalidInput(
            "ticker must contain a letter or digit".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Validates an order or pie id.
pub fn validate_id(kind: &str, id: i64) -> Result<i64, Trading212Error> {
    if id <= 0 {
        return Err(Trading212Error::InvalidInput(format!(
            "{} id must be positive, got {}",
            kind, id
        )));
    }
    Ok(id)
}

/// Validates a free-text search term.
pub fn validate_search(input: &str) -> Result<String, Trading212Error> {
    const MAX_SEARCH_LENGTH: usize = 100;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Trading212Error::InvalidInput(
            "search term must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_SEARCH_LENGTH {
        return Err(Trading212Error::InvalidInput(format!(
            "search term too long (max {} characters)",
            MAX_SEARCH_LENGTH
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_valid() {
        assert_eq!(validate_ticker("AAPL_US_EQ").unwrap(), "AAPL_US_EQ");
        assert_eq!(validate_ticker("  VUSAl_EQ ").unwrap(), "VUSAl_EQ");
        assert_eq!(validate_ticker("BRK.B_US_EQ").unwrap(), "BRK.B_US_EQ");
    }

    #[test]
    fn ticker_invalid() {
        assert!(validate_ticker("").is_err());
        assert!(validate_ticker("   ").is_err());
        assert!(validate_ticker("AAPL/../orders").is_err());
        assert!(validate_ticker("AAPL US").is_err());
        assert!(validate_ticker(".").is_err());
        assert!(validate_ticker(" .. ").is_err());
        assert!(validate_ticker(&"A".repeat(MAX_TICKER_LENGTH + 1)).is_err());
    }

    #[test]
    fn id_must_be_positive() {
        assert_eq!(validate_id("order", 12).unwrap(), 12);
        assert!(validate_id("order", 0).is_err());
        let err = validate_id("pie", -4).unwrap_err();
        assert!(err.to_string().contains("pie id must be positive"));
    }

    #[test]
    fn search_term() {
        assert_eq!(validate_search(" apple ").unwrap(), "apple");
        assert!(validate_search("").is_err());
        assert!(validate_search(&"x".repeat(101)).is_err());
    }
}
