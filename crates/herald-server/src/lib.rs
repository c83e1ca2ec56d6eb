#![allow(clippy::must_use_candidate)]

mod catalogue;
mod extract;
mod health;
mod lessons;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use herald_config::Config;
use herald_response::DataResponder;
use tower_http::trace::TraceLayer;

pub use catalogue::{Catalogue, Lesson};
pub use lessons::LessonState;

/// Number of lessons the reference catalogue is seeded with
pub const FIXTURE_LESSONS: u64 = 25;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            router: router(config),
            listen_address: config.server.listen_address(),
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// Build the application router
///
/// Lesson routes are always mounted; the health route only when enabled.
#[must_use]
pub fn router(config: &Config) -> Router {
    let state = LessonState {
        catalogue: Arc::new(Catalogue::fixtures(FIXTURE_LESSONS)),
        responder: DataResponder::new(config.response.clone()),
    };

    let mut app = Router::new().merge(lessons::router().with_state(state));

    if config.server.health.enabled {
        app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
    }

    app.layer(TraceLayer::new_for_http())
}
