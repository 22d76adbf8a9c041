//! Refreshable views over remote resources (positions, orders, pies).
//!
//! A [`Record`] pairs a plain data struct with the client it came from, so
//! the data can be re-fetched in place.

use std::ops::Deref;

use serde::de::DeserializeOwned;
use trading212_api::types::{Order, Pie, Position};
use trading212_api::{Client, Endpoint};

use crate::error::Trading212Error;

/// A resource that can be listed and fetched individually by identifier.
pub trait RemoteResource: DeserializeOwned {
    /// Noun used in log messages.
    const KIND: &'static str;

    /// The endpoint listing every resource of this kind.
    fn collection() -> Endpoint;

    /// The endpoint serving this particular resource.
    fn endpoint(&self) -> Endpoint;
}

impl RemoteResource for Position {
    const KIND: &'static str = "position";

    fn collection() -> Endpoint {
        Endpoint::positions()
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::position(&self.ticker)
    }
}

impl RemoteResource for Order {
    const KIND: &'static str = "order";

    fn collection() -> Endpoint {
        Endpoint::orders()
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::order(self.id)
    }
}

impl RemoteResource for Pie {
    const KIND: &'static str = "pie";

    fn collection() -> Endpoint {
        Endpoint::pies()
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::pie(self.id)
    }
}

/// A resource's data plus the client used to refresh it.
///
/// Derefs to the data, so fields read as `record.ticker`.
pub struct Record<'a, T> {
    client: &'a Client,
    data: T,
}

impl<'a, T: RemoteResource> Record<'a, T> {
    pub fn new(client: &'a Client, data: T) -> Self {
        Self { client, data }
    }

    /// Fetches a single resource by endpoint.
    pub async fn fetch(client: &'a Client, endpoint: &Endpoint) -> Result<Self, Trading212Error> {
        let data = client.fetch::<T>(endpoint).await?;
        Ok(Self::new(client, data))
    }

    /// Fetches every resource of this kind.
    pub async fn fetch_all(client: &'a Client) -> Result<Vec<Self>, Trading212Error> {
        let items = client.fetch::<Vec<T>>(&T::collection()).await?;
        tracing::debug!("loaded {} {} records", items.len(), T::KIND);
        Ok(items
            .into_iter()
            .map(|data| Self::new(client, data))
            .collect())
    }

    /// Re-fetches this resource and replaces the data.
    ///
    /// On error the current data is left untouched.
    pub async fn refresh(&mut self) -> Result<(), Trading212Error> {
        let endpoint = self.data.endpoint();
        tracing::info!("Updating {} {}", T::KIND, endpoint);
        let fresh = self.client.fetch::<T>(&endpoint).await?;
        self.data = fresh;
        Ok(())
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn client(&self) -> &'a Client {
        self.client
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T> Deref for Record<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_follow_identifiers() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "creationTime": "2024-03-01T09:30:00Z",
            "id": 77,
            "status": "NEW",
            "strategy": "QUANTITY",
            "ticker": "TSLA_US_EQ",
            "type": "MARKET"
        }))
        .unwrap();
        assert_eq!(order.endpoint().to_string(), "equity/orders/77");
        assert_eq!(Order::collection().to_string(), "equity/orders");
        assert_eq!(Pie::collection().to_string(), "equity/pies");
        assert_eq!(Position::collection().to_string(), "equity/portfolio");
    }
}
