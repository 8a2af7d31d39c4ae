use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadTestError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Cannot load configuration: {0}")]
    CannotLoadConfiguration(String),
    #[error("Target {url} is unreachable after {attempts} attempts")]
    TargetUnreachable { url: String, attempts: u32 },
    #[error("Cannot create HTTP client")]
    CannotCreateClient(#[source] reqwest::Error),
    #[error("Cannot start embedded server")]
    CannotStartEmbeddedServer(#[from] echo_server::ServerError),
    #[error("Cannot write report to file")]
    CannotWriteReport(#[source] std::io::Error),
    #[error("Logging initialization failure: {0}")]
    LoggingInitFailure(String),
}

/// Failure of a single request that never produced an HTTP response.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransportError {
    #[error("Request timed out")]
    Timeout,
    #[error("Connection failed: {0}")]
    Connect(String),
    #[error("Request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            TransportError::Timeout
        } else if error.is_connect() {
            TransportError::Connect(error.to_string())
        } else {
            TransportError::Request(error.to_string())
        }
    }
}
