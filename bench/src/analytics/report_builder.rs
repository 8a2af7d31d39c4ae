use crate::metrics::snapshot::MetricsSnapshot;
use chrono::Utc;
use loadtest_report::{
    hardware::BenchmarkHardware, latency::LatencySummary, params::ReportParams, report::Report,
    resources::ResourceUsage,
};
use std::time::Duration;

pub struct ReportBuilder;

impl ReportBuilder {
    /// Derives the final report. Every ratio is guarded: without requests the
    /// rates are 0 and the latency aggregates are unavailable.
    pub fn build(
        snapshot: &MetricsSnapshot,
        elapsed: Duration,
        params: ReportParams,
        resources: ResourceUsage,
        hardware: BenchmarkHardware,
    ) -> Report {
        let elapsed_secs = elapsed.as_secs_f64();
        let throughput_rps = if elapsed_secs > 0.0 {
            snapshot.total_count as f64 / elapsed_secs
        } else {
            0.0
        };

        Report {
            uuid: uuid::Uuid::new_v4(),
            timestamp: Utc::now().to_rfc3339(),
            hardware,
            params,
            duration_actual_secs: elapsed_secs,
            total_requests: snapshot.total_count,
            successful_requests: snapshot.success_count,
            failed_requests: snapshot.error_count,
            throughput_rps,
            success_rate: snapshot.success_rate(),
            latency: LatencySummary {
                avg_latency_ms: snapshot.average_latency().map(as_millis_f64),
                min_latency_ms: snapshot.min_latency.map(as_millis_f64),
                max_latency_ms: snapshot.max_latency.map(as_millis_f64),
                median_latency_ms: snapshot.median_latency().map(as_millis_f64),
            },
            resources,
        }
    }
}

fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}
