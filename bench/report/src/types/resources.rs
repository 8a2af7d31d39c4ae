use crate::utils::round_float;
use serde::{Deserialize, Serialize};

/// Footprint of the load generating process at the end of the run.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default, derive_new::new)]
pub struct ResourceUsage {
    pub memory_mb: u64,
    #[serde(serialize_with = "round_float")]
    pub cpu_usage_percent: f64,
}
