use crate::configs::test_config::TestConfig;
use crate::utils::duration::LoadDuration;
use clap::Parser;
use std::path::PathBuf;

/// Drives an HTTP endpoint with concurrent users for a fixed time and reports
/// throughput and latency.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct LoadTestArgs {
    /// Path to a TOML configuration file, defaults to LOADTEST_CONFIG_PATH or configs/loadtest.toml
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Number of concurrent users
    #[arg(long, short = 'u')]
    pub users: Option<u32>,

    /// Test duration, e.g. 10s, 1m 30s
    #[arg(long, short = 'd')]
    pub duration: Option<LoadDuration>,

    /// URL the POST requests are sent to
    #[arg(long)]
    pub url: Option<String>,

    /// URL probed with GET before the run
    #[arg(long)]
    pub health_url: Option<String>,

    /// JSON body of every request
    #[arg(long)]
    pub body: Option<String>,

    /// Do not start an embedded echo server when the target is down
    #[arg(long, default_value_t = false)]
    pub no_embedded_server: bool,

    /// Directory the JSON report is written to
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Debug logging instead of info; RUST_LOG takes precedence
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl LoadTestArgs {
    /// Command line flags have the last word over file and environment.
    pub fn apply_to(&self, config: &mut TestConfig) {
        if let Some(users) = self.users {
            config.concurrent_users = users;
        }
        if let Some(duration) = self.duration {
            config.duration = duration;
        }
        if let Some(url) = &self.url {
            config.target_url = url.clone();
        }
        if let Some(health_url) = &self.health_url {
            config.health_url = health_url.clone();
        }
        if let Some(body) = &self.body {
            config.request_body = body.clone();
        }
        if self.no_embedded_server {
            config.bootstrap.embedded_server = false;
        }
    }
}
