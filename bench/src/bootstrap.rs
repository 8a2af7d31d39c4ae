use crate::configs::test_config::TestConfig;
use crate::error::LoadTestError;
use echo_server::EchoServer;
use reqwest::{Client, StatusCode, Url};
use std::net::SocketAddr;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Echo server started in-process because no target was running.
/// Dropping the handle stops the server.
#[derive(Debug)]
pub struct EmbeddedTarget {
    address: SocketAddr,
    shutdown: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl EmbeddedTarget {
    pub async fn start(address: &str) -> Result<Self, LoadTestError> {
        let server = EchoServer::bind(address).await?;
        let address = server.local_addr()?;
        let shutdown = CancellationToken::new();
        let server_shutdown = shutdown.clone();
        let handle = tokio::spawn(async move {
            if let Err(error) = server.serve(server_shutdown).await {
                error!("Embedded server failed: {error}");
            }
        });
        info!("Embedded server listening on: {address}");

        Ok(Self {
            address,
            shutdown,
            handle: Some(handle),
        })
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    pub async fn shutdown(mut self) {
        self.shutdown.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(error) = handle.await {
                warn!("Embedded server task did not finish cleanly: {error}");
            }
        }
        debug!("Embedded server on {} stopped", self.address);
    }
}

impl Drop for EmbeddedTarget {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// GET on the health endpoint answered with 200. Any failure means not ready.
pub async fn is_target_ready(client: &Client, health_url: &Url) -> bool {
    match client.get(health_url.clone()).send().await {
        Ok(response) => response.status() == StatusCode::OK,
        Err(error) => {
            debug!("Health check of {health_url} failed: {error}");
            false
        }
    }
}

/// Makes sure something answers on the target before the run starts.
///
/// When the health check fails and the embedded server is enabled, an echo
/// server is bound to the target's host and port. Either way the health check
/// is retried `bootstrap.attempts` times, `bootstrap.interval` apart, before
/// giving up with [`LoadTestError::TargetUnreachable`].
pub async fn ensure_target_ready(
    config: &TestConfig,
) -> Result<Option<EmbeddedTarget>, LoadTestError> {
    let health_url = config.health_url()?;
    let client = Client::builder()
        .timeout(config.bootstrap.probe_timeout.get_duration())
        .no_proxy()
        .build()
        .map_err(LoadTestError::CannotCreateClient)?;

    if is_target_ready(&client, &health_url).await {
        info!("✓ Target is already running at {health_url}");
        return Ok(None);
    }

    let embedded = if config.bootstrap.embedded_server {
        info!("Target is not running. Starting embedded server...");
        let address = bind_address(&config.target_url()?)?;
        Some(EmbeddedTarget::start(&address).await?)
    } else {
        warn!("Target is not running and embedded server is disabled, waiting for it...");
        None
    };

    let attempts = config.bootstrap.attempts;
    for attempt in 1..=attempts {
        tokio::time::sleep(config.bootstrap.interval.get_duration()).await;
        if is_target_ready(&client, &health_url).await {
            info!("✓ Target is ready at {health_url}");
            return Ok(embedded);
        }
        debug!("Target not ready yet, attempt {attempt}/{attempts}");
    }

    if let Some(embedded) = embedded {
        embedded.shutdown().await;
    }
    Err(LoadTestError::TargetUnreachable {
        url: health_url.to_string(),
        attempts,
    })
}

fn bind_address(url: &Url) -> Result<String, LoadTestError> {
    let host = url.host_str().ok_or_else(|| {
        LoadTestError::InvalidConfiguration(format!("target_url '{url}' has no host"))
    })?;
    let port = url.port_or_known_default().ok_or_else(|| {
        LoadTestError::InvalidConfiguration(format!("target_url '{url}' has no port"))
    })?;
    Ok(format!("{host}:{port}"))
}
