use crate::actors::worker::{Worker, WorkerSummary};
use crate::analytics::report_builder::ReportBuilder;
use crate::client::{ClientFactory, TargetClient};
use crate::configs::test_config::TestConfig;
use crate::error::LoadTestError;
use crate::metrics::store::MetricsStore;
use crate::utils::resources::ResourceSampler;
use human_repr::HumanCount;
use loadtest_report::hardware::BenchmarkHardware;
use loadtest_report::params::ReportParams;
use loadtest_report::report::Report;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

const PROGRESS_INTERVAL: Duration = Duration::from_secs(1);

/// Runs a fixed pool of workers against the target for the configured duration.
pub struct LoadTestRunner {
    config: TestConfig,
    client_factory: Arc<dyn ClientFactory>,
    shutdown: CancellationToken,
}

impl LoadTestRunner {
    pub fn new(config: TestConfig, client_factory: Arc<dyn ClientFactory>) -> Self {
        Self {
            config,
            client_factory,
            shutdown: CancellationToken::new(),
        }
    }

    /// Ends the measuring phase early once `shutdown` is cancelled; the report
    /// still covers everything recorded until then.
    pub fn with_shutdown(mut self, shutdown: CancellationToken) -> Self {
        self.shutdown = shutdown;
        self
    }

    pub async fn run(&self) -> Result<Report, LoadTestError> {
        let users = self.config.concurrent_users;
        info!(
            "Starting load test: {users} concurrent users for {} against {}",
            self.config.duration, self.config.target_url
        );

        let clients = self.create_clients().await?;
        let metrics = Arc::new(MetricsStore::new());
        let stop = CancellationToken::new();
        let mut resources = ResourceSampler::new();

        let started_at = Instant::now();
        let mut workers = JoinSet::new();
        for (worker_id, client) in (1..=users).zip(clients) {
            let worker = Worker::new(worker_id, client, metrics.clone(), stop.child_token());
            workers.spawn(worker.run());
        }

        self.wait_for_end(&metrics, started_at).await;
        let resource_usage = resources.sample();
        stop.cancel();
        info!(
            "Stop signal sent, waiting up to {} for in-flight requests...",
            self.config.drain_timeout
        );

        let summaries = drain(&mut workers, self.config.drain_timeout.get_duration()).await;
        let elapsed = started_at.elapsed();
        let snapshot = metrics.snapshot();
        info!(
            "Load test finished in {:.2} s: {} requests from {} of {users} workers, {} failed",
            elapsed.as_secs_f64(),
            snapshot.total_count.human_count_bare(),
            summaries.len(),
            snapshot.error_count
        );

        let params = ReportParams::new(
            users,
            self.config.duration.as_secs_f64(),
            self.config.target_url.clone(),
        );
        Ok(ReportBuilder::build(
            &snapshot,
            elapsed,
            params,
            resource_usage,
            BenchmarkHardware::get_system_info(),
        ))
    }

    async fn create_clients(&self) -> Result<Vec<Box<dyn TargetClient>>, LoadTestError> {
        let users = self.config.concurrent_users;
        info!("Creating {users} HTTP client(s)...");
        let mut clients = Vec::with_capacity(users as usize);
        for _ in 0..users {
            clients.push(self.client_factory.create_client().await?);
        }
        Ok(clients)
    }

    async fn wait_for_end(&self, metrics: &MetricsStore, started_at: Instant) {
        let deadline = started_at + self.config.duration.get_duration();
        let mut progress =
            tokio::time::interval_at(started_at + PROGRESS_INTERVAL, PROGRESS_INTERVAL);
        loop {
            tokio::select! {
                _ = tokio::time::sleep_until(deadline) => return,
                _ = self.shutdown.cancelled() => {
                    warn!("Shutdown requested, stopping the load test early");
                    return;
                }
                _ = progress.tick() => {
                    debug!(
                        "Progress: {:.0} s elapsed, {} requests sent",
                        started_at.elapsed().as_secs_f64(),
                        metrics.total_count().human_count_bare()
                    );
                }
            }
        }
    }
}

/// Waits for the workers to notice the stop signal. Workers still running when
/// the timeout expires are aborted and whatever they had in flight is lost.
async fn drain(workers: &mut JoinSet<WorkerSummary>, timeout: Duration) -> Vec<WorkerSummary> {
    let deadline = Instant::now() + timeout;
    let mut summaries = Vec::with_capacity(workers.len());
    loop {
        match tokio::time::timeout_at(deadline, workers.join_next()).await {
            Ok(Some(Ok(summary))) => summaries.push(summary),
            Ok(Some(Err(error))) => error!("Worker task failed: {error}"),
            Ok(None) => break,
            Err(_) => {
                warn!(
                    "{} worker(s) did not stop within {} ms, aborting them",
                    workers.len(),
                    timeout.as_millis()
                );
                workers.abort_all();
                while workers.join_next().await.is_some() {}
                break;
            }
        }
    }
    summaries
}
