#[cfg(test)]
pub(crate) mod fake;
pub mod http;

use crate::error::{LoadTestError, TransportError};
use async_trait::async_trait;

/// Sends the fixed request of a run to the target.
#[async_trait]
pub trait TargetClient: Send + Sync {
    /// Issues one request and returns the HTTP status of the response.
    async fn send_request(&self) -> Result<u16, TransportError>;
}

/// Creates one [`TargetClient`] per worker, so workers never share a connection pool.
#[async_trait]
pub trait ClientFactory: Send + Sync {
    async fn create_client(&self) -> Result<Box<dyn TargetClient>, LoadTestError>;
}
