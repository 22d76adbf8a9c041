use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Limit,
    Stop,
    Market,
    StopLimit,
    #[serde(other)]
    Unknown,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limit => "LIMIT",
            Self::Stop => "STOP",
            Self::Market => "MARKET",
            Self::StopLimit => "STOP_LIMIT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Whether the order was placed by share count or by cash value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStrategy {
    Quantity,
    Value,
    #[serde(other)]
    Unknown,
}

/// A pending equity order, as returned by `equity/orders`.
///
/// Price and quantity fields are only populated for the order types that use
/// them, e.g. `limit_price` is null on a market order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,

    pub ticker: String,

    pub creation_time: DateTime<Utc>,

    pub filled_quantity: Option<f64>,

    pub filled_value: Option<f64>,

    pub limit_price: Option<f64>,

    pub quantity: Option<f64>,

    pub status: String,

    pub stop_price: Option<f64>,

    pub strategy: OrderStrategy,

    #[serde(rename = "type")]
    pub order_type: OrderType,

    pub value: Option<f64>,
}
