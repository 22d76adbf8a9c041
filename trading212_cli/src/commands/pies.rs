use anyhow::Result;
use clap::Args;
use trading212_lib::{validation, Client};

use crate::output::{build_pie_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct PiesArgs {
    /// Show a single pie by ID
    #[arg(long)]
    pub id: Option<i64>,
}

pub async fn run(args: &PiesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let pies = match args.id {
        Some(id) => vec![client.get_pie(validation::validate_id("pie", id)?).await?],
        None => client.get_pies().await?,
    };

    match format {
        OutputFormat::Json => print_json(&pies),
        _ => print_rows(build_pie_rows(&pies), format)?,
    }
    Ok(())
}
