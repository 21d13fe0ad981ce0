// src/logging.rs

use tracing_subscriber::{
    filter::{Directive, LevelFilter},
    fmt, EnvFilter,
};

/// Install the global fmt subscriber: `RUST_LOG` plus `level` as an extra
/// directive (INFO when `level` doesn't parse).
pub fn init(level: &str) {
    let directive = level
        .parse::<Directive>()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    let filter = EnvFilter::from_default_env().add_directive(directive);
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent_and_tolerates_bad_levels() {
        init("not a [level");
        init("debug");
        tracing::debug!("logging initialised");
    }
}
