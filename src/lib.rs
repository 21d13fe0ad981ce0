pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod server;
pub mod types;

pub use error::SheetError;
pub use extract::extract;
pub use fetch::{fetch_default_walk_audits, fetch_walk_audits, DEFAULT_SHEET_URL};
pub use types::WalkAudit;
