//! Logging setup.

use clap::ValueEnum;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

static INIT_ONCE: Once = Once::new();

/// Installs the global subscriber. `RUST_LOG` wins over `level` when set.
/// Later calls are no-ops.
pub fn init_logging(level: &str, format: LogFormat) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        match format {
            LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
            LogFormat::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .init(),
        }
    });
}
