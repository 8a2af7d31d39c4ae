use crate::error::TransportError;
use std::time::Duration;

pub const SUCCESS_STATUS: u16 = 200;

/// Classified result of one request attempt.
///
/// A latency is present only when a response was received, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOutcome {
    pub latency: Option<Duration>,
    pub succeeded: bool,
    pub status_or_error: String,
}

impl RequestOutcome {
    pub fn response(status: u16, latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            succeeded: status == SUCCESS_STATUS,
            status_or_error: status.to_string(),
        }
    }

    pub fn transport_failure(error: &TransportError) -> Self {
        Self {
            latency: None,
            succeeded: false,
            status_or_error: error.to_string(),
        }
    }
}
