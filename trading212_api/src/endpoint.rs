//! Request descriptors for the GET endpoints the client exposes.

use std::fmt;

use url::Url;

use crate::Error;

/// A GET request target: a fixed resource path plus an optional identifier
/// appended as the final path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    path: &'static str,
    id: Option<String>,
}

impl Endpoint {
    pub const fn new(path: &'static str) -> Self {
        Self { path, id: None }
    }

    /// Appends a resource identifier (ticker, order id, pie id).
    pub fn with_id(mut self, id: impl ToString) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn positions() -> Self {
        Self::new("equity/portfolio")
    }

    pub fn position(ticker: &str) -> Self {
        Self::positions().with_id(ticker)
    }

    pub fn orders() -> Self {
        Self::new("equity/orders")
    }

    pub fn order(id: i64) -> Self {
        Self::orders().with_id(id)
    }

    pub fn pies() -> Self {
        Self::new("equity/pies")
    }

    pub fn pie(id: i64) -> Self {
        Self::pies().with_id(id)
    }

    pub fn exchanges() -> Self {
        Self::new("metadata/exchanges")
    }

    pub fn instruments() -> Self {
        Self::new("metadata/instruments")
    }

    pub fn account_info() -> Self {
        Self::new("equity/account/info")
    }

    pub fn account_summary() -> Self {
        Self::new("equity/account/summary")
    }

    pub fn cash() -> Self {
        Self::new("account/cash")
    }

    /// Cash breakdown under the `equity/` prefix used by newer API keys.
    pub fn equity_cash() -> Self {
        Self::new("equity/account/cash")
    }

    /// Resolves this endpoint against a base URL ending in `/`.
    ///
    /// The identifier is pushed as its own percent-encoded segment, so a
    /// ticker can never escape into a different path. `.` and `..` are
    /// rejected since a URL path cannot carry them as literal segments.
    pub fn resolve(&self, base: &Url) -> Result<Url, Error> {
        let mut url = base.join(self.path).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e.to_string())
        })?;
        if let Some(id) = &self.id {
            if id.is_empty() {
                return Err(Error::InvalidParameter(format!(
                    "empty identifier for {}",
                    self.path
                )));
            }
            if id == "." || id == ".." {
                return Err(Error::InvalidParameter(format!(
                    "invalid identifier '{}' for {}",
                    id, self.path
                )));
            }
            url.path_segments_mut()
                .map_err(|_| Error::InvalidUrl(format!("{} cannot take path segments", base)))?
                .push(id);
        }
        Ok(url)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{}/{}", self.path, id),
            None => f.write_str(self.path),
        }
    }
}
