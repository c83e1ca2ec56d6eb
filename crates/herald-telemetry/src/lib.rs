//! Logging setup for Herald
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a `fmt`
//! layer in the configured format.

use herald_config::{LogFormat, TelemetryConfig};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Build the filter for a configuration
///
/// `RUST_LOG` takes precedence over the configured directive. An invalid
/// directive falls back to `info`.
#[must_use]
pub fn env_filter(config: &TelemetryConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed
pub fn init(config: &TelemetryConfig) -> anyhow::Result<()> {
    let filter = env_filter(config);
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
