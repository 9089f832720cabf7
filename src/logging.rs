//! Tracing subscriber setup.

use crate::config::AppConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// The configured log file; used while the terminal UI owns the screen.
    File,
    /// Standard error.
    Stderr,
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured filter. Calling this twice is harmless.
pub fn init(config: &AppConfig, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let _ = match target {
        LogTarget::File => {
            let file = std::fs::File::create(config.log_file()).with_context(|| {
                format!("Failed to create log file {}", config.log_file().display())
            })?;
            builder.with_writer(Arc::new(file)).with_ansi(false).try_init()
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };
    Ok(())
}
