use anyhow::Result;
use clap::Args;
use trading212_lib::{validation, Client};

use crate::output::{build_order_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct OrdersArgs {
    /// Show a single order by ID
    #[arg(long)]
    pub id: Option<i64>,
}

pub async fn run(args: &OrdersArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let orders = match args.id {
        Some(id) => vec![client.get_order(validation::validate_id("order", id)?).await?],
        None => client.get_orders().await?,
    };

    match format {
        OutputFormat::Json => print_json(&orders),
        _ => print_rows(build_order_rows(&orders), format)?,
    }
    Ok(())
}
