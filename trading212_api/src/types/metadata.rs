use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEvent {
    pub date: DateTime<Utc>,

    /// `OPEN`, `CLOSE`, `PRE_MARKET_OPEN`, `AFTER_HOURS_CLOSE`, ...
    #[serde(rename = "type")]
    pub event_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingSchedule {
    pub id: i64,
    #[serde(default)]
    pub time_events: Vec<TimeEvent>,
}

/// An exchange and its trading calendars, from `metadata/exchanges`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub working_schedules: Vec<WorkingSchedule>,
}

/// A tradable instrument, from `metadata/instruments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub ticker: String,

    #[serde(rename = "type")]
    pub instrument_type: String,

    pub working_schedule_id: Option<i64>,

    pub isin: Option<String>,

    pub currency_code: String,

    pub name: String,

    pub short_name: Option<String>,

    pub max_open_quantity: Option<f64>,

    pub added_on: Option<DateTime<Utc>>,
}
