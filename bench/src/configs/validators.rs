use crate::configs::test_config::{BootstrapConfig, TestConfig};
use crate::error::LoadTestError;
use tracing::error;

pub trait Validatable<E> {
    fn validate(&self) -> Result<(), E>;
}

impl Validatable<LoadTestError> for TestConfig {
    fn validate(&self) -> Result<(), LoadTestError> {
        if self.concurrent_users == 0 {
            return invalid("concurrent users must be greater than 0");
        }

        if self.duration.is_zero() {
            return invalid("duration must be greater than 0");
        }

        if self.request_timeout.is_zero() {
            return invalid("request timeout must be greater than 0");
        }

        if self.drain_timeout.is_zero() {
            return invalid("drain timeout must be greater than 0");
        }

        self.target_url()?;
        self.health_url()?;
        self.bootstrap.validate()
    }
}

impl Validatable<LoadTestError> for BootstrapConfig {
    fn validate(&self) -> Result<(), LoadTestError> {
        if self.attempts == 0 {
            return invalid("bootstrap attempts must be greater than 0");
        }

        if self.probe_timeout.is_zero() {
            return invalid("bootstrap probe timeout must be greater than 0");
        }

        Ok(())
    }
}

fn invalid(reason: &str) -> Result<(), LoadTestError> {
    error!("Test configuration -> {reason}.");
    Err(LoadTestError::InvalidConfiguration(reason.to_owned()))
}
