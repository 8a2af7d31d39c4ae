use crate::error::LoadTestError;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Keeps the non-blocking writers alive; logs are flushed when this is dropped.
pub struct Logging {
    stdout_guard: Option<WorkerGuard>,
    file_guard: Option<WorkerGuard>,
}

impl Logging {
    pub fn new() -> Self {
        Logging {
            stdout_guard: None,
            file_guard: None,
        }
    }

    pub fn init(
        &mut self,
        verbose: bool,
        log_file: Option<&Path>,
    ) -> Result<&mut Self, LoadTestError> {
        let default_level = if verbose { "DEBUG" } else { "INFO" };
        let mut layers = vec![];

        let (stdout_writer, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
        self.stdout_guard = Some(stdout_guard);
        layers.push(
            fmt::Layer::default()
                .with_target(false)
                .with_writer(stdout_writer)
                .boxed(),
        );

        if let Some(file_path) = log_file {
            let directory = file_path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = file_path.file_name().ok_or_else(|| {
                LoadTestError::LoggingInitFailure(format!(
                    "log file path '{}' has no file name",
                    file_path.display()
                ))
            })?;
            let file_appender = tracing_appender::rolling::never(directory, file_name);
            let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);
            self.file_guard = Some(file_guard);
            layers.push(
                fmt::Layer::default()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(file_writer)
                    .boxed(),
            );
        }

        Registry::default()
            .with(layers)
            .with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new(default_level)))
            .try_init()
            .map_err(|error| LoadTestError::LoggingInitFailure(error.to_string()))?;

        Ok(self)
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self::new()
    }
}
