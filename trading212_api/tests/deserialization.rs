use chrono::{TimeZone, Utc};
use trading212_api::types::{
    AccountInfo, AccountSummary, Cash, Exchange, Instrument, Order, OrderStrategy, OrderType, Pie,
    Position,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_positions() {
    let json = load_fixture("positions.json");
    let positions: Vec<Position> = serde_json::from_str(&json).unwrap();
    assert_eq!(positions.len(), 2);

    let aapl = &positions[0];
    assert_eq!(aapl.ticker, "AAPL_US_EQ");
    assert_eq!(aapl.quantity, 10.0);
    assert_eq!(aapl.average_price, 150.0);
    assert_eq!(aapl.current_price, 165.5);
    assert_eq!(aapl.ppl, 155.0);
    assert_eq!(aapl.fx_ppl, Some(-3.25));
    assert_eq!(aapl.frontend, "API");
    assert_eq!(aapl.pie_quantity, 2.5);
    // offset is normalized to UTC
    assert_eq!(
        aapl.initial_fill_date,
        Utc.with_ymd_and_hms(2023, 6, 19, 7, 43, 12).unwrap()
    );

    let etf = &positions[1];
    assert_eq!(etf.fx_ppl, None);
    assert_eq!(etf.max_buy, None);
}

#[test]
fn deserialize_orders() {
    let json = load_fixture("orders.json");
    let orders: Vec<Order> = serde_json::from_str(&json).unwrap();
    assert_eq!(orders.len(), 2);

    let limit = &orders[0];
    assert_eq!(limit.id, 5501);
    assert_eq!(limit.order_type, OrderType::Limit);
    assert_eq!(limit.strategy, OrderStrategy::Quantity);
    assert_eq!(limit.limit_price, Some(140.0));
    assert_eq!(limit.stop_price, None);
    assert_eq!(limit.status, "NEW");

    // order types this client does not know about still parse
    let trailing = &orders[1];
    assert_eq!(trailing.order_type, OrderType::Unknown);
    assert_eq!(trailing.strategy, OrderStrategy::Value);
    assert_eq!(trailing.value, Some(250.0));
}

#[test]
fn deserialize_pies() {
    let json = load_fixture("pies.json");
    let pies: Vec<Pie> = serde_json::from_str(&json).unwrap();
    assert_eq!(pies.len(), 1);

    let pie = &pies[0];
    assert_eq!(pie.id, 42);
    assert_eq!(pie.progress, Some(0.5));
    assert_eq!(pie.status.as_deref(), Some("AHEAD"));
    assert_eq!(pie.dividend_details.gained, 8.1);
    assert_eq!(pie.dividend_details.in_cash, 1.2);
    assert_eq!(pie.dividend_details.reinvested, 6.9);
    assert_eq!(pie.result.price_avg_invested_value, 1000.0);
    assert_eq!(pie.result.price_avg_result, 125.0);
    assert_eq!(pie.result.price_avg_result_coef, 0.125);
    assert_eq!(pie.result.price_avg_value, 1125.0);
}

#[test]
fn deserialize_cash() {
    let json = load_fixture("cash.json");
    let cash: Cash = serde_json::from_str(&json).unwrap();
    assert_eq!(cash.free, 250.75);
    assert_eq!(cash.total, 1905.75);
    assert_eq!(cash.pie_cash, 12.34);
    assert_eq!(cash.blocked, None);
}

#[test]
fn deserialize_account_info_and_summary() {
    let info: AccountInfo = serde_json::from_str(&load_fixture("account_info.json")).unwrap();
    assert_eq!(info.currency_code, "GBP");
    assert_eq!(info.id, 1234567);

    let summary: AccountSummary =
        serde_json::from_str(&load_fixture("account_summary.json")).unwrap();
    assert_eq!(summary.currency, "EUR");
    assert_eq!(summary.total_value, Some(1905.75));
    assert_eq!(summary.cash.available_to_trade, Some(250.75));
    assert_eq!(summary.investments.unrealized_profit_loss, Some(155.0));
}

#[test]
fn deserialize_account_summary_without_sections() {
    let summary: AccountSummary =
        serde_json::from_str(r#"{"id": 1, "currency": "USD"}"#).unwrap();
    assert_eq!(summary.total_value, None);
    assert_eq!(summary.cash.in_pies, None);
    assert_eq!(summary.investments.total_cost, None);
}

#[test]
fn deserialize_metadata() {
    let exchanges: Vec<Exchange> = serde_json::from_str(&load_fixture("exchanges.json")).unwrap();
    assert_eq!(exchanges[0].name, "NYSE");
    assert_eq!(exchanges[0].working_schedules[0].time_events.len(), 2);
    assert_eq!(exchanges[0].working_schedules[0].time_events[0].event_type, "OPEN");

    let instruments: Vec<Instrument> =
        serde_json::from_str(&load_fixture("instruments.json")).unwrap();
    assert_eq!(instruments.len(), 2);
    assert_eq!(instruments[0].instrument_type, "STOCK");
    assert_eq!(instruments[0].isin.as_deref(), Some("US0378331005"));
    assert!(instruments[0].added_on.is_some());
    assert_eq!(instruments[1].max_open_quantity, None);
    assert_eq!(instruments[1].added_on, None);
}

#[test]
fn missing_required_field_fails() {
    let result: Result<Position, _> = serde_json::from_str(r#"{"ticker": "AAPL_US_EQ"}"#);
    assert!(result.is_err());
}
