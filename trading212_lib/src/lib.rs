//! Library layer for the Trading 212 client: configuration, refreshable
//! records, and portfolio analysis helpers.
//!
//! Wraps the `trading212_api` crate, which owns the HTTP request layer
//! (authentication, error classification, rate-limit retries).

pub mod analysis;
pub mod config;
pub mod error;
pub mod record;
pub mod validation;

pub use trading212_api;
pub use trading212_api::types;
pub use trading212_api::{Client, Credentials, Endpoint, Environment, RetryPolicy};

pub use analysis::{percent_change, portfolio_summary, Performance, PortfolioSummary};
pub use config::ClientConfig;
pub use error::Trading212Error;
pub use record::{Record, RemoteResource};
