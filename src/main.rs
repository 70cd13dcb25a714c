mod config;
mod handlers;
mod models;
mod scraping;

use anyhow::Result;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::handlers::offices::build_report;
use crate::handlers::output::{Outcome, publish};
use crate::models::offices::OfficeRecord;
use crate::scraping::scraper::UscisScraper;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("{}", render(run().await));
}

async fn run() -> Result<Outcome> {
    let config = Config::from_env()?;
    info!(
        "checking {} target cities, cutoff {:?}",
        config.target_cities.len(),
        config.cutoff
    );

    let offices = UscisScraper::new(config.url.clone())?.fetch_offices().await?;
    execute(&offices, &config)
}

/// Aggregates an already fetched office list and publishes the result.
fn execute(offices: &[OfficeRecord], config: &Config) -> Result<Outcome> {
    let report = build_report(offices, &config.target_cities, config.cutoff)?;
    publish(
        &report,
        &config.output_file,
        config.github_output.as_deref(),
        config.cutoff,
    )
}

/// The single stdout line (or JSON block) for a run. Every failure collapses
/// into one `Error:` line; nothing is written on error.
fn render(outcome: Result<Outcome>) -> String {
    match outcome {
        Ok(Outcome::Written(json)) => json,
        Ok(Outcome::NothingFound(notice)) => notice,
        Err(e) => {
            error!("run failed: {:?}", e);
            format!("Error: {:#}", e)
        }
    }
}
