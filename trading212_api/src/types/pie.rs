use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendDetails {
    pub gained: f64,
    pub in_cash: f64,
    pub reinvested: f64,
}

/// Performance of a pie measured against its average invested value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieResult {
    pub price_avg_invested_value: f64,
    pub price_avg_result: f64,
    pub price_avg_result_coef: f64,
    pub price_avg_value: f64,
}

/// An investment basket, as returned by `equity/pies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pie {
    pub id: i64,

    pub cash: f64,

    /// Progress toward the goal, 0.0 to 1.0. Null when no goal is set.
    pub progress: Option<f64>,

    /// `AHEAD`, `ON_TRACK` or `BEHIND`. Null when no goal is set.
    pub status: Option<String>,

    pub dividend_details: DividendDetails,

    pub result: PieResult,
}
