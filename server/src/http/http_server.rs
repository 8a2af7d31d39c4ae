use crate::http::diagnostics::request_diagnostics;
use crate::http::echo;
use crate::server_error::ServerError;
use axum::middleware;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Echo target bound to a TCP listener. Binding and serving are split so the
/// caller can learn the actual address before requests start flowing, which
/// matters when binding to port 0.
#[derive(Debug)]
pub struct EchoServer {
    listener: TcpListener,
}

impl EchoServer {
    pub async fn bind(address: &str) -> Result<Self, ServerError> {
        let listener =
            TcpListener::bind(address)
                .await
                .map_err(|source| ServerError::CannotBind {
                    address: address.to_owned(),
                    source,
                })?;
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves until `shutdown` is cancelled, then finishes in-flight requests.
    pub async fn serve(self, shutdown: CancellationToken) -> Result<(), ServerError> {
        let address = self.local_addr()?;
        let app = echo::router().layer(middleware::from_fn(request_diagnostics));
        info!("Started echo server on: {address}");
        axum::serve(
            self.listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move { shutdown.cancelled_owned().await })
        .await?;
        info!("Echo server on: {address} has stopped.");
        Ok(())
    }
}
