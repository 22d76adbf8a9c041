mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use trading212_lib::ClientConfig;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "trading212")]
#[command(about = "Query a Trading 212 account from the command line")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List open positions
    Positions(commands::positions::PositionsArgs),
    /// List pending orders
    Orders(commands::orders::OrdersArgs),
    /// List pies
    Pies(commands::pies::PiesArgs),
    /// Show the cash breakdown
    Cash(commands::account::CashArgs),
    /// Show account metadata
    Account(commands::account::AccountArgs),
    /// List exchanges and their trading calendars
    Exchanges,
    /// List or search tradable instruments
    Instruments(commands::metadata::InstrumentsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("trading212=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let config = ClientConfig::from_env()?;
    let client = config.build_client()?;

    let result = match &cli.command {
        Commands::Positions(args) => commands::positions::run(args, &client, &format).await,
        Commands::Orders(args) => commands::orders::run(args, &client, &format).await,
        Commands::Pies(args) => commands::pies::run(args, &client, &format).await,
        Commands::Cash(args) => commands::account::run_cash(args, &client, &format).await,
        Commands::Account(args) => commands::account::run_account(args, &client, &format).await,
        Commands::Exchanges => commands::metadata::run_exchanges(&client, &format).await,
        Commands::Instruments(args) => {
            commands::metadata::run_instruments(args, &client, &format).await
        }
    };

    let summary = client.tracker().summary();
    tracing::debug!(
        "{} requests, {} rate limited, {:.1}s spent waiting",
        summary.requests_made,
        summary.requests_rate_limited,
        summary.total_backoff_secs
    );
    client.close();

    result
}
