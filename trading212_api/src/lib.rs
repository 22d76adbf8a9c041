mod client;
mod credentials;
mod endpoint;
mod errors;
mod response;
mod retry;
pub mod types;
pub use self::client::{Client, Environment, DEMO_BASE_URL, LIVE_BASE_URL};
pub use self::credentials::Credentials;
pub use self::endpoint::Endpoint;
pub use self::errors::Error;
pub use self::response::{
    classify, parse_retry_after, DEFAULT_RETRY_AFTER, RATE_LIMIT_PERIOD_HEADER,
};
pub use self::retry::{with_retry, RequestTracker, RetryPolicy, TrackerSummary};
