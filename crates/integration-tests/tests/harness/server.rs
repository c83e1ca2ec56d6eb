//! Test server wrapper that starts Herald on a random port

use std::net::SocketAddr;

use herald_config::Config;
use herald_server::Server;
use reqwest::StatusCode;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a test server with the given configuration
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let server = Server::new(&config);
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        // Bind the listener here so we know the actual port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self {
            addr,
            shutdown,
            client: reqwest::Client::new(),
        })
    }

    /// Start a test server with the default configuration
    pub async fn start_default() -> anyhow::Result<Self> {
        Self::start(super::config::ConfigBuilder::new().build()).await
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// `GET` a route and decode its envelope
    pub async fn get_json(&self, path: &str) -> anyhow::Result<(StatusCode, Value)> {
        let resp = self.client.get(self.url(path)).send().await?;
        read_envelope(resp).await
    }

    /// `POST` a JSON body to a route and decode its envelope
    pub async fn post_json(&self, path: &str, body: &Value) -> anyhow::Result<(StatusCode, Value)> {
        let resp = self.client.post(self.url(path)).json(body).send().await?;
        read_envelope(resp).await
    }
}

/// Status and JSON body of a response, checking it is labelled as JSON
async fn read_envelope(resp: reqwest::Response) -> anyhow::Result<(StatusCode, Value)> {
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    anyhow::ensure!(
        content_type == "application/json",
        "expected a JSON envelope, got content type `{content_type}` with status {status}"
    );

    Ok((status, resp.json().await?))
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
