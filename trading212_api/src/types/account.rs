use serde::{Deserialize, Serialize};

/// Cash breakdown from `account/cash` (or `equity/account/cash`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cash {
    pub free: f64,
    pub total: f64,
    pub ppl: f64,
    pub result: f64,
    pub invested: f64,
    pub pie_cash: f64,
    pub blocked: Option<f64>,
}

/// Account metadata from `equity/account/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub currency_code: String,
    pub id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCash {
    pub available_to_trade: Option<f64>,
    pub in_pies: Option<f64>,
    pub reserved_for_orders: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryInvestments {
    pub current_value: Option<f64>,
    pub realized_profit_loss: Option<f64>,
    pub total_cost: Option<f64>,
    pub unrealized_profit_loss: Option<f64>,
}

/// Account overview from `equity/account/summary`, served to newer keys in
/// place of `equity/account/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: i64,

    pub currency: String,

    pub total_value: Option<f64>,

    #[serde(default)]
    pub cash: SummaryCash,

    #[serde(default)]
    pub investments: SummaryInvestments,
}
