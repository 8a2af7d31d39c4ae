use crate::configs::test_config::{BootstrapConfig, TestConfig};
use std::fmt::{Display, Formatter};

impl Display for TestConfig {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{{ concurrent_users: {}, duration: {}, target_url: {}, health_url: {}, request_body: {}, request_timeout: {}, drain_timeout: {}, bootstrap: {} }}",
            self.concurrent_users,
            self.duration,
            self.target_url,
            self.health_url,
            self.request_body,
            self.request_timeout,
            self.drain_timeout,
            self.bootstrap
        )
    }
}

impl Display for BootstrapConfig {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{{ embedded_server: {}, attempts: {}, interval: {}, probe_timeout: {} }}",
            self.embedded_server, self.attempts, self.interval, self.probe_timeout
        )
    }
}
