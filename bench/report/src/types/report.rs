use crate::types::hardware::BenchmarkHardware;
use crate::types::latency::LatencySummary;
use crate::types::params::ReportParams;
use crate::types::resources::ResourceUsage;
use crate::utils::round_float;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

const REPORT_FILE_NAME: &str = "report.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Report {
    /// Run unique identifier
    pub uuid: Uuid,

    /// Timestamp when the run was finished (RFC 3339)
    pub timestamp: String,

    /// Machine the load was generated from
    pub hardware: BenchmarkHardware,

    /// Parameters the run was started with
    pub params: ReportParams,

    /// Wall-clock time of the whole run, including the drain of in-flight requests
    #[serde(serialize_with = "round_float")]
    pub duration_actual_secs: f64,

    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,

    #[serde(serialize_with = "round_float")]
    pub throughput_rps: f64,

    /// Percentage of successful requests, 0 when nothing was sent
    #[serde(serialize_with = "round_float")]
    pub success_rate: f64,

    pub latency: LatencySummary,

    pub resources: ResourceUsage,
}

impl Report {
    pub fn dump_to_json(&self, output_dir: &Path) -> io::Result<PathBuf> {
        std::fs::create_dir_all(output_dir)?;

        let report_path = output_dir.join(REPORT_FILE_NAME);
        let report_json = serde_json::to_string_pretty(self)?;
        std::fs::write(&report_path, report_json)?;
        debug!("Report {} written to: {}", self.uuid, report_path.display());
        Ok(report_path)
    }
}
