use crate::metrics::outcome::RequestOutcome;
use crate::metrics::snapshot::MetricsSnapshot;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

#[derive(Debug, Default)]
struct MetricsState {
    success_count: u64,
    error_count: u64,
    total_count: u64,
    total_latency: Duration,
    min_latency: Option<Duration>,
    max_latency: Option<Duration>,
    latency_samples: Vec<Duration>,
}

/// Aggregated outcomes of all workers of a run.
///
/// Every [`record_outcome`] call updates counters, latency sum, min, max and
/// the sample list under one lock, so the aggregates never disagree with each
/// other: `total == success + error` and every sample lies within
/// `[min, max]` after any completed call.
///
/// [`record_outcome`]: MetricsStore::record_outcome
#[derive(Debug, Default)]
pub struct MetricsStore {
    state: Mutex<MetricsState>,
}

impl MetricsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(samples: usize) -> Self {
        Self {
            state: Mutex::new(MetricsState {
                latency_samples: Vec::with_capacity(samples),
                ..Default::default()
            }),
        }
    }

    pub fn record_outcome(&self, outcome: &RequestOutcome) {
        let mut state = self.lock();
        state.total_count += 1;
        if outcome.succeeded {
            state.success_count += 1;
        } else {
            state.error_count += 1;
        }

        let Some(latency) = outcome.latency else {
            return;
        };
        state.total_latency = state.total_latency.saturating_add(latency);
        state.min_latency = Some(state.min_latency.map_or(latency, |min| min.min(latency)));
        state.max_latency = Some(state.max_latency.map_or(latency, |max| max.max(latency)));
        state.latency_samples.push(latency);
    }

    /// Read-only request count for progress reporting, without copying the
    /// samples the way [`snapshot`](MetricsStore::snapshot) does.
    pub fn total_count(&self) -> u64 {
        self.lock().total_count
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let state = self.lock();
        MetricsSnapshot {
            success_count: state.success_count,
            error_count: state.error_count,
            total_count: state.total_count,
            total_latency: state.total_latency,
            min_latency: state.min_latency,
            max_latency: state.max_latency,
            latency_samples: state.latency_samples.clone(),
        }
    }

    // A worker panicking while holding the lock cannot leave the state half
    // updated: every field is written after all fallible work is done.
    fn lock(&self) -> MutexGuard<'_, MetricsState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
