use crate::client::{ClientFactory, TargetClient};
use crate::error::{LoadTestError, TransportError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub(crate) enum FakeBehavior {
    Respond { status: u16, latency: Duration },
    Fail { delay: Duration },
    /// Never answers within any sane drain timeout.
    Hang,
}

/// In-memory target; clones share the call counter.
#[derive(Debug, Clone)]
pub(crate) struct FakeClient {
    behavior: FakeBehavior,
    pub(crate) calls: Arc<AtomicU64>,
}

impl FakeClient {
    pub(crate) fn new(behavior: FakeBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(AtomicU64::new(0)),
        }
    }
}

#[async_trait]
impl TargetClient for FakeClient {
    async fn send_request(&self) -> Result<u16, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            FakeBehavior::Respond { status, latency } => {
                tokio::time::sleep(latency).await;
                Ok(status)
            }
            FakeBehavior::Fail { delay } => {
                tokio::time::sleep(delay).await;
                Err(TransportError::Connect("connection refused".to_owned()))
            }
            FakeBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(200)
            }
        }
    }
}

/// Hands out clients with the same behavior; `Hang` applies only to the first
/// `hanging` clients, the rest respond immediately.
#[derive(Debug, Clone)]
pub(crate) struct FakeClientFactory {
    behavior: FakeBehavior,
    hanging: u64,
    created: Arc<AtomicU64>,
    pub(crate) calls: Arc<AtomicU64>,
    fail_creation: bool,
}

impl FakeClientFactory {
    pub(crate) fn new(behavior: FakeBehavior) -> Self {
        Self {
            behavior,
            hanging: 0,
            created: Arc::new(AtomicU64::new(0)),
            calls: Arc::new(AtomicU64::new(0)),
            fail_creation: false,
        }
    }

    pub(crate) fn with_hanging(mut self, hanging: u64) -> Self {
        self.hanging = hanging;
        self
    }

    pub(crate) fn failing_creation() -> Self {
        Self {
            fail_creation: true,
            ..Self::new(FakeBehavior::Fail {
                delay: Duration::ZERO,
            })
        }
    }
}

#[async_trait]
impl ClientFactory for FakeClientFactory {
    async fn create_client(&self) -> Result<Box<dyn TargetClient>, LoadTestError> {
        if self.fail_creation {
            return Err(LoadTestError::InvalidConfiguration(
                "client creation disabled".to_owned(),
            ));
        }

        let index = self.created.fetch_add(1, Ordering::SeqCst);
        let behavior = if index < self.hanging {
            FakeBehavior::Hang
        } else {
            self.behavior
        };
        Ok(Box::new(FakeClient {
            behavior,
            calls: self.calls.clone(),
        }))
    }
}
