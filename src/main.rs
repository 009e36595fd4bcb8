use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::{error, info};

mod cli;
mod error;
mod extract;
mod fetch;
mod models;
mod output;
mod request;

use crate::cli::Cli;
use crate::error::ScrapeError;
use crate::models::ScrapeRequest;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the confirmation line
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("product_scraper=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let scrape_request = cli.to_request();

    match run(&scrape_request, &cli.output).await {
        Ok(()) => {
            println!("Scraping completed. Data saved to {}", cli.output.display());
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// The whole pipeline: fetch, extract, serialize. Strictly linear; the
/// output file is touched only after extraction has completed in memory.
async fn run(scrape_request: &ScrapeRequest, output: &Path) -> Result<(), ScrapeError> {
    let client = fetch::create_client()?;
    let html = fetch::fetch_page(&client, scrape_request).await?;

    let result = extract::extract(&html);
    info!(
        "Found {} titles, {} prices, {} images on {}",
        result.titles.len(),
        result.prices.len(),
        result.images.len(),
        scrape_request.url
    );

    output::write_result(&result, output)?;
    Ok(())
}
