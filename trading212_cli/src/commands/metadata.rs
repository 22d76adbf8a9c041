//! The `exchanges` and `instruments` subcommands.

use anyhow::Result;
use clap::Args;
use trading212_lib::types::Instrument;
use trading212_lib::{validation, Client};

use crate::output::{build_exchange_rows, build_instrument_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct InstrumentsArgs {
    /// Filter by ticker, name or ISIN (case-insensitive substring)
    #[arg(long)]
    pub search: Option<String>,

    /// Maximum number of instruments to print
    #[arg(long, default_value = "50")]
    pub limit: usize,
}

pub async fn run_exchanges(client: &Client, format: &OutputFormat) -> Result<()> {
    let exchanges = client.get_exchanges().await?;
    match format {
        OutputFormat::Json => print_json(&exchanges),
        _ => print_rows(build_exchange_rows(&exchanges), format)?,
    }
    Ok(())
}

pub async fn run_instruments(
    args: &InstrumentsArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let needle = match &args.search {
        Some(term) => Some(validation::validate_search(term)?.to_lowercase()),
        None => None,
    };

    let instruments = client.get_instruments().await?;
    let total = instruments.len();
    let mut matched = filter_instruments(instruments, needle.as_deref());
    let match_count = matched.len();
    matched.truncate(args.limit);

    match format {
        OutputFormat::Json => print_json(&matched),
        _ => print_rows(build_instrument_rows(&matched), format)?,
    }
    eprintln!(
        "Showing {} of {} matching instruments ({} total)",
        matched.len(),
        match_count,
        total
    );
    Ok(())
}

/// Keeps instruments whose ticker, name, short name or ISIN contains
/// `needle`, which must already be lowercase.
fn filter_instruments(instruments: Vec<Instrument>, needle: Option<&str>) -> Vec<Instrument> {
    let Some(needle) = needle else {
        return instruments;
    };
    instruments
        .into_iter()
        .filter(|i| {
            i.ticker.to_lowercase().contains(needle)
                || i.name.to_lowercase().contains(needle)
                || i.short_name
                    .as_deref()
                    .is_some_and(|s| s.to_lowercase().contains(needle))
                || i.isin
                    .as_deref()
                    .is_some_and(|s| s.to_lowercase().contains(needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instruments() -> Vec<Instrument> {
        serde_json::from_value(serde_json::json!([
            {"ticker": "AAPL_US_EQ", "type": "STOCK", "currencyCode": "USD", "name": "Apple", "shortName": "AAPL", "isin": "US0378331005"},
            {"ticker": "VUSAl_EQ", "type": "ETF", "currencyCode": "GBX", "name": "Vanguard S&P 500", "shortName": "VUSA", "isin": "IE00B3XXRP09"},
            {"ticker": "MSFT_US_EQ", "type": "STOCK", "currencyCode": "USD", "name": "Microsoft"}
        ]))
        .unwrap()
    }

    #[test]
    fn no_search_keeps_everything() {
        assert_eq!(filter_instruments(instruments(), None).len(), 3);
    }

    #[test]
    fn search_matches_name_ticker_and_isin() {
        let by_name = filter_instruments(instruments(), Some("vanguard"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].ticker, "VUSAl_EQ");

        let by_ticker = filter_instruments(instruments(), Some("msft"));
        assert_eq!(by_ticker[0].name, "Microsoft");

        let by_isin = filter_instruments(instruments(), Some("us0378"));
        assert_eq!(by_isin[0].ticker, "AAPL_US_EQ");

        assert!(filter_instruments(instruments(), Some("tesla")).is_empty());
    }
}
