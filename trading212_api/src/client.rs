//! HTTP client for the Trading 212 public REST API.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    response::{classify, parse_body, RATE_LIMIT_PERIOD_HEADER},
    retry::{with_retry, RequestTracker, RetryPolicy},
    types::{AccountInfo, AccountSummary, Cash, Exchange, Instrument, Order, Pie, Position},
    Credentials, Endpoint, Error,
};

/// Request timeout for every API call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const LIVE_BASE_URL: &str = "https://live.trading212.com/api/v0/";
pub const DEMO_BASE_URL: &str = "https://demo.trading212.com/api/v0/";

/// Which Trading 212 environment to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Live,
    /// Paper-trading account.
    Demo,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Live => LIVE_BASE_URL,
            Self::Demo => DEMO_BASE_URL,
        }
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "demo" | "paper" => Ok(Self::Demo),
            other => Err(Error::UnknownEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => f.write_str("live"),
            Self::Demo => f.write_str("demo"),
        }
    }
}

/// HTTP client for the Trading 212 API.
///
/// Holds one `reqwest::Client` connection pool for its whole lifetime. Calls
/// take `&self`, so a single client can serve many concurrent requests; each
/// call runs its own retry loop. Call [`Client::close`] to release the pool.
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    authorization: HeaderValue,
    retry: RetryPolicy,
    tracker: RequestTracker,
}

impl Client {
    /// Creates a client for the live environment.
    ///
    /// Fails before any network access if the credentials are empty or cannot
    /// be sent as a header.
    pub fn new(credentials: Credentials) -> Result<Self, Error> {
        Self::with_environment(credentials, Environment::Live)
    }

    pub fn with_environment(credentials: Credentials, env: Environment) -> Result<Self, Error> {
        Self::with_base_url(env.base_url(), credentials)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, credentials: Credentials) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .gzip(true)
            .build()?;
        Self::with_http_client(http, base_url, credentials)
    }

    /// Creates a client on top of an existing `reqwest::Client`, sharing its
    /// connection pool.
    pub fn with_http_client(
        http: reqwest::Client,
        base_url: &str,
        credentials: Credentials,
    ) -> Result<Self, Error> {
        let authorization = credentials.authorization()?;
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
            authorization,
            retry: RetryPolicy::default(),
            tracker: RequestTracker::new(),
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Outcome counters for every request made through this client.
    pub fn tracker(&self) -> &RequestTracker {
        &self.tracker
    }

    /// Issues a single GET and validates the response.
    async fn dispatch<T: DeserializeOwned>(&self, endpoint: &Endpoint, url: &Url) -> Result<T, Error> {
        tracing::debug!("GET {}", endpoint);
        let resp = self
            .http
            .get(url.clone())
            .timeout(REQUEST_TIMEOUT)
            .header(AUTHORIZATION, self.authorization.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| transport_error(endpoint, e))?;

        let status = resp.status().as_u16();
        let rate_limit_period = resp
            .headers()
            .get(RATE_LIMIT_PERIOD_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = resp
            .text()
            .await
            .map_err(|e| transport_error(endpoint, e))?;

        if let Err(err) = classify(status, rate_limit_period.as_deref(), &body) {
            if !err.is_retryable() {
                tracing::error!("{} failed with status {}: {}", endpoint, status, err);
            }
            return Err(err);
        }

        parse_body(&body)
    }

    /// Fetches and deserializes an endpoint, retrying while rate limited.
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, Error> {
        let url = endpoint.resolve(&self.base_url)?;
        let label = endpoint.to_string();
        with_retry(&self.retry, &self.tracker, &label, || {
            self.dispatch(endpoint, &url)
        })
        .await
    }

    /// Fetches all open positions.
    pub async fn get_positions(&self) -> Result<Vec<Position>, Error> {
        self.fetch(&Endpoint::positions()).await
    }

    /// Fetches the open position for a single ticker, e.g. `AAPL_US_EQ`.
    pub async fn get_position(&self, ticker: &str) -> Result<Position, Error> {
        self.fetch(&Endpoint::position(ticker)).await
    }

    /// Fetches all pending equity orders.
    pub async fn get_orders(&self) -> Result<Vec<Order>, Error> {
        self.fetch(&Endpoint::orders()).await
    }

    pub async fn get_order(&self, order_id: i64) -> Result<Order, Error> {
        self.fetch(&Endpoint::order(order_id)).await
    }

    /// Fetches all pies.
    pub async fn get_pies(&self) -> Result<Vec<Pie>, Error> {
        self.fetch(&Endpoint::pies()).await
    }

    pub async fn get_pie(&self, pie_id: i64) -> Result<Pie, Error> {
        self.fetch(&Endpoint::pie(pie_id)).await
    }

    /// Fetches every exchange and its working schedules.
    pub async fn get_exchanges(&self) -> Result<Vec<Exchange>, Error> {
        self.fetch(&Endpoint::exchanges()).await
    }

    /// Fetches every tradable instrument. The response is large (tens of
    /// thousands of entries).
    pub async fn get_instruments(&self) -> Result<Vec<Instrument>, Error> {
        self.fetch(&Endpoint::instruments()).await
    }

    /// Fetches cash from `account/cash`.
    pub async fn get_cash(&self) -> Result<Cash, Error> {
        self.fetch(&Endpoint::cash()).await
    }

    /// Fetches cash from `equity/account/cash`, for keys that only expose the
    /// `equity/` routes.
    pub async fn get_equity_cash(&self) -> Result<Cash, Error> {
        self.fetch(&Endpoint::equity_cash()).await
    }

    pub async fn get_account_info(&self) -> Result<AccountInfo, Error> {
        self.fetch(&Endpoint::account_info()).await
    }

    pub async fn get_account_summary(&self) -> Result<AccountSummary, Error> {
        self.fetch(&Endpoint::account_summary()).await
    }

    /// Releases the connection pool.
    ///
    /// Takes the client by value, so every request borrowing it has finished
    /// before the pool is dropped.
    pub fn close(self) {
        let summary = self.tracker.summary();
        tracing::debug!(
            "closing client after {} requests ({} rate limited, {} failed)",
            summary.requests_made,
            summary.requests_rate_limited,
            summary.requests_failed
        );
        drop(self.http);
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

fn normalize_base_url(base_url: &str) -> Result<Url, Error> {
    let with_slash = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };
    let url = Url::parse(&with_slash).map_err(|e| {
        tracing::error!("Invalid base URL {}: {}", base_url, e);
        Error::InvalidUrl(format!("{}: {}", base_url, e))
    })?;
    if url.cannot_be_a_base() {
        return Err(Error::InvalidUrl(format!("{} cannot be a base URL", base_url)));
    }
    Ok(url)
}

fn transport_error(endpoint: &Endpoint, e: reqwest::Error) -> Error {
    if e.is_timeout() {
        tracing::error!("{} timed out after {}s", endpoint, REQUEST_TIMEOUT.as_secs());
        return Error::Timeout(format!(
            "no response within {}s",
            REQUEST_TIMEOUT.as_secs()
        ));
    }
    tracing::error!("Failed to get {}: {}", endpoint, e);
    Error::Network(e)
}
