use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, derive_new::new)]
pub struct ReportParams {
    pub concurrent_users: u32,
    pub configured_duration_secs: f64,
    pub target_url: String,
}
