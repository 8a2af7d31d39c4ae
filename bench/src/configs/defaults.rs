use crate::configs::test_config::{BootstrapConfig, TestConfig};
use crate::utils::duration::LoadDuration;

pub const DEFAULT_CONCURRENT_USERS: u32 = 5;
pub const DEFAULT_DURATION: LoadDuration = LoadDuration::from_secs(10);
pub const DEFAULT_TARGET_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_HEALTH_URL: &str = "http://localhost:8080/health";
pub const DEFAULT_REQUEST_BODY: &str = r#"{"message":"test"}"#;
pub const DEFAULT_REQUEST_TIMEOUT: LoadDuration = LoadDuration::from_secs(10);
pub const DEFAULT_DRAIN_TIMEOUT: LoadDuration = LoadDuration::from_secs(5);
pub const DEFAULT_BOOTSTRAP_ATTEMPTS: u32 = 3;
pub const DEFAULT_BOOTSTRAP_INTERVAL: LoadDuration = LoadDuration::from_millis(500);
pub const DEFAULT_PROBE_TIMEOUT: LoadDuration = LoadDuration::from_secs(2);

impl Default for TestConfig {
    fn default() -> TestConfig {
        TestConfig {
            concurrent_users: DEFAULT_CONCURRENT_USERS,
            duration: DEFAULT_DURATION,
            target_url: DEFAULT_TARGET_URL.to_owned(),
            health_url: DEFAULT_HEALTH_URL.to_owned(),
            request_body: DEFAULT_REQUEST_BODY.to_owned(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            drain_timeout: DEFAULT_DRAIN_TIMEOUT,
            bootstrap: BootstrapConfig::default(),
        }
    }
}

impl Default for BootstrapConfig {
    fn default() -> BootstrapConfig {
        BootstrapConfig {
            embedded_server: true,
            attempts: DEFAULT_BOOTSTRAP_ATTEMPTS,
            interval: DEFAULT_BOOTSTRAP_INTERVAL,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}
