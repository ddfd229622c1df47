mod aggregate;
mod client;
mod config;
mod error;
mod fetcher;
mod models;
mod store;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use log::info;

use crate::client::TransactionsClient;
use crate::config::Config;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    config: Config,

    /// Phase to run. Without one, fetch runs first and read follows.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download every page of transactions into the data file
    Fetch,
    /// Total the amounts in the data file flowing into and out of the network
    Read,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.config;

    match cli.command {
        Some(Commands::Fetch) => fetch(&config).await?,
        Some(Commands::Read) => read(&config)?,
        None => {
            fetch(&config).await?;
            read(&config)?;
        }
    }

    Ok(())
}

async fn fetch(config: &Config) -> anyhow::Result<()> {
    let client = TransactionsClient::new(config).context("failed to set up HTTP client")?;

    info!("Fetching transactions from {} ...", config.endpoint);
    let count = fetcher::run_fetch(
        &client,
        config.page_limit,
        config.page_delay(),
        &config.data_file,
    )
    .await
    .with_context(|| format!("failed to write {}", config.data_file.display()))?;

    println!("Total transactions fetched: {}", count);
    Ok(())
}

fn read(config: &Config) -> anyhow::Result<()> {
    let transactions = store::read_transactions(&config.data_file)
        .with_context(|| format!("failed to read {}", config.data_file.display()))?;

    let totals = aggregate::aggregate(&transactions, &config.network);
    info!(
        "{} transactions read: {} from {}, {} to {}",
        transactions.len(),
        totals.from_count,
        config.network,
        totals.to_count,
        config.network
    );

    let (to_total, from_total) = totals.display(config.scale);
    println!("to {}: {}", config.network, to_total);
    println!("from {}: {}", config.network, from_total);
    Ok(())
}
