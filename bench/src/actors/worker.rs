use crate::client::TargetClient;
use crate::metrics::outcome::{RequestOutcome, SUCCESS_STATUS};
use crate::metrics::store::MetricsStore;
use std::sync::Arc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// What a worker did before it observed the stop signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerSummary {
    pub worker_id: u32,
    pub requests: u64,
    pub failures: u64,
}

/// One simulated user: sends requests back to back until stopped.
pub struct Worker {
    worker_id: u32,
    client: Box<dyn TargetClient>,
    metrics: Arc<MetricsStore>,
    stop: CancellationToken,
}

impl Worker {
    pub fn new(
        worker_id: u32,
        client: Box<dyn TargetClient>,
        metrics: Arc<MetricsStore>,
        stop: CancellationToken,
    ) -> Self {
        Self {
            worker_id,
            client,
            metrics,
            stop,
        }
    }

    /// The stop signal is checked only before a request is sent: a request in
    /// flight when the signal arrives still completes and is recorded.
    pub async fn run(self) -> WorkerSummary {
        debug!("Worker #{} → started", self.worker_id);
        let mut summary = WorkerSummary {
            worker_id: self.worker_id,
            requests: 0,
            failures: 0,
        };

        while !self.stop.is_cancelled() {
            let outcome = self.execute_request().await;
            self.metrics.record_outcome(&outcome);
            summary.requests += 1;
            if !outcome.succeeded {
                summary.failures += 1;
            }
        }

        debug!(
            "Worker #{} → stopped after {} requests, {} failed",
            self.worker_id, summary.requests, summary.failures
        );
        summary
    }

    async fn execute_request(&self) -> RequestOutcome {
        let started_at = Instant::now();
        match self.client.send_request().await {
            Ok(status) => {
                let latency = started_at.elapsed();
                if status != SUCCESS_STATUS {
                    debug!(
                        "Worker #{} → unexpected status: {status} after {} µs",
                        self.worker_id,
                        latency.as_micros()
                    );
                }
                RequestOutcome::response(status, latency)
            }
            Err(error) => {
                warn!("Worker #{} → request failed: {error}", self.worker_id);
                RequestOutcome::transport_failure(&error)
            }
        }
    }
}
