use crate::utils::round_optional_float;
use serde::{Deserialize, Serialize};

/// Latency aggregates in milliseconds. `None` means no value could be computed,
/// e.g. because no request completed.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct LatencySummary {
    #[serde(serialize_with = "round_optional_float")]
    pub avg_latency_ms: Option<f64>,
    #[serde(serialize_with = "round_optional_float")]
    pub min_latency_ms: Option<f64>,
    #[serde(serialize_with = "round_optional_float")]
    pub max_latency_ms: Option<f64>,
    #[serde(serialize_with = "round_optional_float")]
    pub median_latency_ms: Option<f64>,
}

impl LatencySummary {
    /// True once at least one response was received.
    pub fn is_available(&self) -> bool {
        self.min_latency_ms.is_some()
    }
}
