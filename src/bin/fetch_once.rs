//! Fetch the sheet once and print the extracted records as JSON.
//!
//! Usage: `fetch_once [SHEET_URL]` (falls back to `SHEET_URL` / the default sheet).

use anyhow::{Context, Result};
use reqwest::Client;
use std::env;
use tracing::info;
use url::Url;
use walkaudits::{config::Config, fetch_walk_audits, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(&config.log_level);

    let url = match env::args().nth(1) {
        Some(raw) => Url::parse(&raw).with_context(|| format!("parsing URL argument {:?}", raw))?,
        None => config.sheet_url,
    };

    let audits = fetch_walk_audits(&Client::new(), &url)
        .await
        .with_context(|| format!("fetching walk audits from {}", url))?;
    info!(records = audits.len(), "fetched");

    println!("{}", serde_json::to_string_pretty(&audits)?);
    Ok(())
}
