//! The `cash` and `account` subcommands.

use anyhow::Result;
use clap::Args;
use trading212_lib::Client;

use crate::output::{build_cash_rows, kv, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct CashArgs {
    /// Use the `equity/account/cash` endpoint
    #[arg(long)]
    pub equity: bool,
}

#[derive(Args)]
pub struct AccountArgs {
    /// Use `equity/account/summary` instead of `equity/account/info`
    #[arg(long)]
    pub summary: bool,
}

pub async fn run_cash(args: &CashArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let cash = if args.equity {
        client.get_equity_cash().await?
    } else {
        client.get_cash().await?
    };

    match format {
        OutputFormat::Json => print_json(&cash),
        _ => print_rows(build_cash_rows(&cash), format)?,
    }
    Ok(())
}

pub async fn run_account(args: &AccountArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if args.summary {
        let summary = client.get_account_summary().await?;
        if *format == OutputFormat::Json {
            print_json(&summary);
            return Ok(());
        }
        let money = |v: Option<f64>| v.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string());
        let rows = vec![
            kv("ID", summary.id.to_string()),
            kv("Currency", summary.currency.clone()),
            kv("Total value", money(summary.total_value)),
            kv("Available to trade", money(summary.cash.available_to_trade)),
            kv("Cash in pies", money(summary.cash.in_pies)),
            kv("Reserved for orders", money(summary.cash.reserved_for_orders)),
            kv("Investments value", money(summary.investments.current_value)),
            kv("Total cost", money(summary.investments.total_cost)),
            kv("Realized P/L", money(summary.investments.realized_profit_loss)),
            kv("Unrealized P/L", money(summary.investments.unrealized_profit_loss)),
        ];
        return print_rows(rows, format);
    }

    let info = client.get_account_info().await?;
    match format {
        OutputFormat::Json => print_json(&info),
        _ => print_rows(
            vec![
                kv("ID", info.id.to_string()),
                kv("Currency", info.currency_code.clone()),
            ],
            format,
        )?,
    }
    Ok(())
}
