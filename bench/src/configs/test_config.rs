use crate::error::LoadTestError;
use crate::utils::duration::LoadDuration;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DisplayFromStr;

/// Parameters of one run. Read once at start, immutable afterwards.
#[serde_as]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TestConfig {
    pub concurrent_users: u32,
    #[serde_as(as = "DisplayFromStr")]
    pub duration: LoadDuration,
    pub target_url: String,
    pub health_url: String,
    pub request_body: String,
    #[serde_as(as = "DisplayFromStr")]
    pub request_timeout: LoadDuration,
    /// Grace period for in-flight requests after the stop signal.
    #[serde_as(as = "DisplayFromStr")]
    pub drain_timeout: LoadDuration,
    pub bootstrap: BootstrapConfig,
}

/// How the target is probed, and possibly started, before the run.
#[serde_as]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BootstrapConfig {
    pub embedded_server: bool,
    pub attempts: u32,
    #[serde_as(as = "DisplayFromStr")]
    pub interval: LoadDuration,
    #[serde_as(as = "DisplayFromStr")]
    pub probe_timeout: LoadDuration,
}

impl TestConfig {
    pub fn target_url(&self) -> Result<Url, LoadTestError> {
        parse_url("target_url", &self.target_url)
    }

    pub fn health_url(&self) -> Result<Url, LoadTestError> {
        parse_url("health_url", &self.health_url)
    }
}

fn parse_url(name: &str, value: &str) -> Result<Url, LoadTestError> {
    Url::parse(value).map_err(|error| {
        LoadTestError::InvalidConfiguration(format!("{name} '{value}' is not a valid URL: {error}"))
    })
}
