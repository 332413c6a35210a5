//! Tracing setup
//!
//! While the TUI owns the terminal, log lines go to a file; every other mode
//! logs to stderr. `RUST_LOG` takes precedence over the configured filter.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{TallyError, TallyResult};

static TRACING_INIT: Once = Once::new();

/// Where log output is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

/// Build the filter from `RUST_LOG`, falling back to `default_directive`
pub fn build_filter(default_directive: &str) -> TallyResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_directive).map_err(|e| {
            TallyError::Config(format!("Invalid log filter '{}': {}", default_directive, e))
        }),
    }
}

/// Install the global subscriber once; later calls are no-ops
pub fn init(target: LogTarget<'_>, default_directive: &str) -> TallyResult<()> {
    let filter = build_filter(default_directive)?;
    let mut result = Ok(());

    TRACING_INIT.call_once(|| {
        result = match target {
            LogTarget::Stderr => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| TallyError::Config(e.to_string())),
            LogTarget::File(path) => match OpenOptions::new().create(true).append(true).open(path)
            {
                Ok(file) => fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init()
                    .map_err(|e| TallyError::Config(e.to_string())),
                Err(e) => Err(TallyError::Io(format!(
                    "Failed to open log file {}: {}",
                    path.display(),
                    e
                ))),
            },
        };
    });

    if result.is_ok() {
        tracing::debug!("tracing initialized");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_directive_is_config_error() {
        // Only meaningful when RUST_LOG is unset, which is the case under cargo test
        if std::env::var_os("RUST_LOG").is_none() {
            let err = build_filter("tally=notalevel").unwrap_err();
            assert!(matches!(err, TallyError::Config(_)));
        }
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(LogTarget::Stderr, "tally=warn").unwrap();
        init(LogTarget::Stderr, "tally=warn").unwrap();
    }
}
