//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use herald_config::{Config, MultiErrorStatus};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder listening on an ephemeral local port
    pub fn new() -> Self {
        let mut config = Config::default();
        config.server.listen_address = Some(SocketAddr::from(([127, 0, 0, 1], 0)));

        Self { config }
    }

    /// Serve the health check from `path`
    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.server.health.path = path.to_owned();
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Choose the status for multi-error responses
    pub fn with_multi_error_status(mut self, policy: MultiErrorStatus) -> Self {
        self.config.response.multi_error_status = policy;
        self
    }

    /// Hide the text of internal errors from clients
    pub fn with_redaction(mut self) -> Self {
        self.config.response.redact_internal = true;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
