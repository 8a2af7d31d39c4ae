use std::time::Duration;

/// Consistent copy of the metrics, taken once no worker writes anymore.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricsSnapshot {
    pub success_count: u64,
    pub error_count: u64,
    pub total_count: u64,
    pub total_latency: Duration,
    pub min_latency: Option<Duration>,
    pub max_latency: Option<Duration>,
    pub latency_samples: Vec<Duration>,
}

impl MetricsSnapshot {
    /// Sum of all latencies divided by the number of requests, `None` without requests.
    pub fn average_latency(&self) -> Option<Duration> {
        if self.total_count == 0 {
            return None;
        }
        let nanos = self.total_latency.as_nanos() / self.total_count as u128;
        Some(Duration::from_nanos(nanos as u64))
    }

    pub fn median_latency(&self) -> Option<Duration> {
        if self.latency_samples.is_empty() {
            return None;
        }

        let mut sorted = self.latency_samples.clone();
        sorted.sort_unstable();
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            Some((sorted[mid - 1] + sorted[mid]) / 2)
        } else {
            Some(sorted[mid])
        }
    }

    /// Percentage of successful requests, 0 when nothing was sent.
    pub fn success_rate(&self) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        self.success_count as f64 * 100.0 / self.total_count as f64
    }
}
