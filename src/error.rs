use thiserror::Error;

/// Failure of a whole fetch-and-extract pass. Individual rows never fail.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("failed to fetch spreadsheet: {0}")]
    Fetch(String),
    #[error("failed to parse HTML: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SheetError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => SheetError::Fetch(format!("bad status: {}", status)),
            None => SheetError::Fetch(err.to_string()),
        }
    }
}
