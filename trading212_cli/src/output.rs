use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use trading212_lib::analysis::PortfolioSummary;
use trading212_lib::types::{Cash, Exchange, Instrument, Order, Pie, Position};
use trading212_lib::Performance;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown values fall back to a table.
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => Self::Json,
            "csv" => Self::Csv,
            "markdown" | "md" => Self::Markdown,
            _ => Self::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
pub(crate) struct PositionRow {
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Quantity")]
    #[serde(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Avg Price")]
    #[serde(rename = "Avg Price")]
    average_price: String,
    #[tabled(rename = "Current")]
    #[serde(rename = "Current")]
    current_price: String,
    #[tabled(rename = "P/L")]
    #[serde(rename = "P/L")]
    ppl: String,
    #[tabled(rename = "Return")]
    #[serde(rename = "Return")]
    return_pct: String,
    #[tabled(rename = "Since")]
    #[serde(rename = "Since")]
    since: String,
}

#[derive(Tabled, Serialize)]
pub(crate) struct OrderRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    order_type: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Quantity")]
    #[serde(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Limit")]
    #[serde(rename = "Limit")]
    limit_price: String,
    #[tabled(rename = "Stop")]
    #[serde(rename = "Stop")]
    stop_price: String,
}

#[derive(Tabled, Serialize)]
pub(crate) struct PieRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Cash")]
    #[serde(rename = "Cash")]
    cash: String,
    #[tabled(rename = "Invested")]
    #[serde(rename = "Invested")]
    invested: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
    #[tabled(rename = "Return")]
    #[serde(rename = "Return")]
    return_pct: String,
    #[tabled(rename = "Dividends")]
    #[serde(rename = "Dividends")]
    dividends: String,
}

#[derive(Tabled, Serialize)]
pub(crate) struct KeyValueRow {
    #[tabled(rename = "Field")]
    #[serde(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
pub(crate) struct ExchangeRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Schedules")]
    #[serde(rename = "Schedules")]
    schedules: usize,
    #[tabled(rename = "First Event")]
    #[serde(rename = "First Event")]
    first_event: String,
}

#[derive(Tabled, Serialize)]
pub(crate) struct InstrumentRow {
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    instrument_type: String,
    #[tabled(rename = "Currency")]
    #[serde(rename = "Currency")]
    currency: String,
    #[tabled(rename = "ISIN")]
    #[serde(rename = "ISIN")]
    isin: String,
}

pub(crate) fn build_position_rows(positions: &[Position]) -> Vec<PositionRow> {
    positions
        .iter()
        .map(|p| PositionRow {
            ticker: p.ticker.clone(),
            quantity: format_quantity(p.quantity),
            average_price: format_money(p.average_price),
            current_price: format_money(p.current_price),
            ppl: format_money(p.ppl),
            return_pct: format_pct(p.return_pct()),
            since: p.initial_fill_date.format("%Y-%m-%d").to_string(),
        })
        .collect()
}

pub(crate) fn build_order_rows(orders: &[Order]) -> Vec<OrderRow> {
    orders
        .iter()
        .map(|o| OrderRow {
            id: o.id,
            created: o.creation_time.format("%Y-%m-%d %H:%M").to_string(),
            ticker: o.ticker.clone(),
            order_type: o.order_type.as_str().to_string(),
            status: o.status.clone(),
            quantity: o.quantity.map(format_quantity).unwrap_or_else(dash),
            limit_price: o.limit_price.map(format_money).unwrap_or_else(dash),
            stop_price: o.stop_price.map(format_money).unwrap_or_else(dash),
        })
        .collect()
}

pub(crate) fn build_pie_rows(pies: &[Pie]) -> Vec<PieRow> {
    pies.iter()
        .map(|p| PieRow {
            id: p.id,
            status: p.status.clone().unwrap_or_else(dash),
            cash: format_money(p.cash),
            invested: format_money(p.result.price_avg_invested_value),
            value: format_money(p.result.price_avg_value),
            return_pct: format_pct(p.return_pct()),
            dividends: format_money(p.dividend_details.gained),
        })
        .collect()
}

pub(crate) fn build_cash_rows(cash: &Cash) -> Vec<KeyValueRow> {
    vec![
        kv("Free", format_money(cash.free)),
        kv("Invested", format_money(cash.invested)),
        kv("In pies", format_money(cash.pie_cash)),
        kv("Blocked", cash.blocked.map(format_money).unwrap_or_else(dash)),
        kv("P/L", format_money(cash.ppl)),
        kv("Result", format_money(cash.result)),
        kv("Total", format_money(cash.total)),
    ]
}

pub(crate) fn build_summary_rows(summary: &PortfolioSummary) -> Vec<KeyValueRow> {
    vec![
        kv("Positions", summary.positions.to_string()),
        kv("Invested", format_money(summary.invested)),
        kv("Current value", format_money(summary.current_value)),
        kv("P/L (price)", format_money(summary.profit_loss)),
        kv("Return", format_pct(summary.return_pct)),
        kv("P/L (reported)", format_money(summary.reported_ppl)),
    ]
}

pub(crate) fn build_exchange_rows(exchanges: &[Exchange]) -> Vec<ExchangeRow> {
    exchanges
        .iter()
        .map(|e| {
            let first_event = e
                .working_schedules
                .iter()
                .flat_map(|s| s.time_events.iter())
                .min_by_key(|t| t.date)
                .map(|t| format!("{} {}", t.event_type, t.date.format("%Y-%m-%d %H:%M")))
                .unwrap_or_else(dash);
            ExchangeRow {
                id: e.id,
                name: e.name.clone(),
                schedules: e.working_schedules.len(),
                first_event,
            }
        })
        .collect()
}

pub(crate) fn build_instrument_rows(instruments: &[Instrument]) -> Vec<InstrumentRow> {
    instruments
        .iter()
        .map(|i| InstrumentRow {
            ticker: i.ticker.clone(),
            name: i.name.clone(),
            instrument_type: i.instrument_type.clone(),
            currency: i.currency_code.clone(),
            isin: i.isin.clone().unwrap_or_else(dash),
        })
        .collect()
}

pub(crate) fn kv(field: &str, value: String) -> KeyValueRow {
    KeyValueRow {
        field: field.to_string(),
        value,
    }
}

/// Prints rows in a tabular format. JSON callers should use [`print_json`]
/// on the underlying data instead.
pub fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table | OutputFormat::Json => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_money(value: f64) -> String {
    format!("{:.2}", value)
}

fn format_quantity(value: f64) -> String {
    let s = format!("{:.6}", value);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn format_pct(value: f64) -> String {
    format!("{:+.2}%", value)
}

fn dash() -> String {
    "-".to_string()
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
