//! Maps HTTP status codes onto the client's error taxonomy.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::Error;

/// Header carrying the number of seconds to wait after a 429.
pub const RATE_LIMIT_PERIOD_HEADER: &str = "x-ratelimit-period";

/// Delay used when a 429 arrives without a usable `x-ratelimit-period`.
pub const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(5);

const MAX_BODY_SNIPPET: usize = 2000;

/// Classifies a response by status code.
///
/// Returns `Ok(())` for 200 and exactly one error kind for every other status.
/// `rate_limit_period` is the raw `x-ratelimit-period` header value, consulted
/// only for 429.
pub fn classify(status: u16, rate_limit_period: Option<&str>, body: &str) -> Result<(), Error> {
    let text = truncate_body(body);
    match status {
        200 => Ok(()),
        400 => Err(Error::InvalidParameter(text)),
        401 => Err(Error::BadApiKey(text)),
        403 => Err(Error::ScopeError(text)),
        404 => Err(Error::NotFound(text)),
        408 => Err(Error::Timeout(text)),
        429 => Err(Error::RateLimited {
            retry_after: parse_retry_after(rate_limit_period),
            body: text,
        }),
        _ => Err(Error::HttpStatus { status, body: text }),
    }
}

/// Parses an `x-ratelimit-period` value in seconds.
///
/// Accepts integers and non-negative decimals. Missing, malformed or
/// out-of-range values yield [`DEFAULT_RETRY_AFTER`].
pub fn parse_retry_after(value: Option<&str>) -> Duration {
    let Some(raw) = value.map(str::trim) else {
        return DEFAULT_RETRY_AFTER;
    };
    if let Ok(secs) = raw.parse::<u64>() {
        return Duration::from_secs(secs);
    }
    match raw.parse::<f64>() {
        Ok(secs) => Duration::try_from_secs_f64(secs).unwrap_or(DEFAULT_RETRY_AFTER),
        Err(_) => DEFAULT_RETRY_AFTER,
    }
}

/// Deserializes a 200 body, which must be a JSON object or array.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        tracing::error!("Failed to parse response: {} | body: {}", e, truncate_body(body));
        Error::Parse(e.to_string())
    })?;
    if !(value.is_object() || value.is_array()) {
        return Err(Error::Parse(format!(
            "expected a JSON object or array, got {}",
            truncate_body(body)
        )));
    }
    serde_json::from_value(value).map_err(|e| {
        tracing::error!("Response did not match expected shape: {}", e);
        Error::Parse(e.to_string())
    })
}

pub(crate) fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_BODY_SNIPPET {
        return body.to_string();
    }
    let mut end = MAX_BODY_SNIPPET;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
