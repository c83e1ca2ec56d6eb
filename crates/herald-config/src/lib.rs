#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod response;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use env::ExpandError;
pub use response::*;
pub use server::*;
pub use telemetry::*;

/// Top-level Herald configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Envelope builder policy
    #[serde(default)]
    pub response: ResponseConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
