use crate::configs::test_config::TestConfig;
use crate::configs::validators::Validatable;
use crate::error::LoadTestError;
use async_trait::async_trait;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::env;
use std::path::Path;
use tracing::info;

const DEFAULT_CONFIG_PATH: &str = "configs/loadtest.toml";
const CONFIG_PATH_ENV: &str = "LOADTEST_CONFIG_PATH";
const ENV_PREFIX: &str = "LOADTEST_";
const ENV_NESTING_SEPARATOR: &str = "__";

#[async_trait]
pub trait ConfigProvider {
    async fn load_config(&self) -> Result<TestConfig, LoadTestError>;
}

/// Layers built-in defaults, an optional TOML file and `LOADTEST_` prefixed
/// environment variables, in increasing order of precedence. Nested keys use a
/// double underscore, e.g. `LOADTEST_BOOTSTRAP__ATTEMPTS`.
#[derive(Debug)]
pub struct FileConfigProvider {
    path: String,
}

impl FileConfigProvider {
    pub fn new(path: String) -> Self {
        Self { path }
    }

    /// Uses the given path, then `LOADTEST_CONFIG_PATH`, then `configs/loadtest.toml`.
    pub fn resolve(path: Option<String>) -> Self {
        let path = path
            .or_else(|| env::var(CONFIG_PATH_ENV).ok())
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());
        Self::new(path)
    }

    fn figment(&self) -> Result<Figment, LoadTestError> {
        let figment = Figment::from(Serialized::defaults(TestConfig::default()));
        let figment = if Path::new(&self.path).is_file() {
            info!("Loading config from path: '{}'...", self.path);
            match Path::new(&self.path).extension().and_then(|e| e.to_str()) {
                Some("toml") => figment.merge(Toml::file(&self.path)),
                extension => {
                    return Err(LoadTestError::CannotLoadConfiguration(format!(
                        "invalid file extension: {}, only .toml is supported",
                        extension.unwrap_or("none")
                    )));
                }
            }
        } else {
            info!(
                "Config file '{}' not found, using defaults and environment.",
                self.path
            );
            figment
        };

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split(ENV_NESTING_SEPARATOR)))
    }

    fn extract(&self) -> Result<TestConfig, LoadTestError> {
        let config: TestConfig = self
            .figment()?
            .extract()
            .map_err(|error| LoadTestError::CannotLoadConfiguration(error.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[async_trait]
impl ConfigProvider for FileConfigProvider {
    async fn load_config(&self) -> Result<TestConfig, LoadTestError> {
        let config = self.extract()?;
        info!("Using config: {config}");
        Ok(config)
    }
}
