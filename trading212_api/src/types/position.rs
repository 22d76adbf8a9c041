use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An open position, as returned by `equity/portfolio`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub ticker: String,

    pub quantity: f64,

    pub average_price: f64,

    pub current_price: f64,

    /// Unrealised profit/loss in the account currency.
    pub ppl: f64,

    /// Profit/loss from currency movement; null for same-currency instruments.
    pub fx_ppl: Option<f64>,

    pub initial_fill_date: DateTime<Utc>,

    /// Origin of the position (`API`, `IOS`, `AUTOINVEST`, ...).
    pub frontend: String,

    pub max_buy: Option<f64>,

    pub max_sell: Option<f64>,

    /// Part of the quantity held inside pies.
    #[serde(default)]
    pub pie_quantity: f64,
}
