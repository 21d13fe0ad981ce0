// src/fetch.rs

use reqwest::Client;
use scraper::Html;
use tracing::{debug, instrument};
use url::Url;

use crate::error::SheetError;
use crate::extract::extract;
use crate::types::WalkAudit;

/// Published HTML rendering of the walk audit sheet. The HTML export keeps
/// cell hyperlinks, which the CSV export drops.
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/1-Vxf7AlXk_WJwwYSVy7F28qjxVXQOAmQ-NN0JImx95Y/pubhtml/sheet?headers=false&gid=379989993";

/// GET the sheet and parse the body into an HTML document.
#[instrument(level = "debug", skip(client, url), fields(url = %url))]
pub async fn fetch_document(client: &Client, url: &Url) -> Result<Html, SheetError> {
    debug!("Fetching sheet");
    let body = client
        .get(url.clone())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
        .map_err(|e| SheetError::Parse(format!("reading body: {}", e)))?;
    debug!(bytes = body.len(), "Received sheet body");

    Ok(Html::parse_document(&body))
}

/// One full fetch-and-extract pass against `url`.
pub async fn fetch_walk_audits(client: &Client, url: &Url) -> Result<Vec<WalkAudit>, SheetError> {
    let doc = fetch_document(client, url).await?;
    Ok(extract(&doc))
}

/// Same as [`fetch_walk_audits`] against [`DEFAULT_SHEET_URL`].
pub async fn fetch_default_walk_audits(client: &Client) -> Result<Vec<WalkAudit>, SheetError> {
    let url = Url::parse(DEFAULT_SHEET_URL).map_err(|e| SheetError::Fetch(e.to_string()))?;
    fetch_walk_audits(client, &url).await
}
