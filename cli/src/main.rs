mod config;

use permaweb_query::{Category, Client, Transaction};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

const SEARCH: &str = "arweave:transactions";
const APP_NAME: &str = "ArweavePH-Cohort-0";
const TITLE: &str = "Lesson 2: Deep Dive into the Arweave Cookbook - Core Concepts";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for the result line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    tracing::debug!(network = %config.network, backend = ?config.backend, "loaded config");

    let client = Client::with_backend(config.network, config.backend)?;
    let result = client
        .search(SEARCH.parse::<Category>()?)
        .tag("Content-Type", ["application/json"])
        .tag("App-Name", [APP_NAME])
        .tag("Title", [TITLE])
        .first()
        .await?;

    println!("{}", render(result.as_ref()));
    Ok(())
}

fn render(result: Option<&Transaction>) -> String {
    match result {
        Some(transaction) => format!("results ==> {}", transaction.id),
        None => "results ==> null".to_string(),
    }
}
