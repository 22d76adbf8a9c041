//! The `positions` subcommand: open positions with price-based returns.

use anyhow::Result;
use clap::Args;
use trading212_lib::analysis::{portfolio_summary, rank_by_return};
use trading212_lib::types::Position;
use trading212_lib::{validation, Client, Record};

use crate::output::{
    build_position_rows, build_summary_rows, print_json, print_rows, OutputFormat,
};

#[derive(Args)]
pub struct PositionsArgs {
    /// Show a single position by ticker (e.g. AAPL_US_EQ)
    #[arg(long)]
    pub ticker: Option<String>,

    /// Order by return, best first
    #[arg(long)]
    pub by_return: bool,

    /// Print portfolio totals instead of individual positions
    #[arg(long)]
    pub summary: bool,
}

pub async fn run(args: &PositionsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let positions: Vec<Position> = match &args.ticker {
        Some(ticker) => {
            let ticker = validation::validate_ticker(ticker)?;
            vec![client.get_position(&ticker).await?]
        }
        None => Record::<Position>::fetch_all(client)
            .await?
            .into_iter()
            .map(Record::into_inner)
            .collect(),
    };

    if args.summary {
        let summary = portfolio_summary(&positions);
        match format {
            OutputFormat::Json => print_json(&summary),
            _ => print_rows(build_summary_rows(&summary), format)?,
        }
        return Ok(());
    }

    let positions: Vec<Position> = if args.by_return {
        rank_by_return(&positions)
            .into_iter()
            .map(|(p, _)| p.clone())
            .collect()
    } else {
        positions
    };

    match format {
        OutputFormat::Json => print_json(&positions),
        _ => print_rows(build_position_rows(&positions), format)?,
    }
    eprintln!("{} positions", positions.len());
    Ok(())
}
