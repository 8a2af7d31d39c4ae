pub mod actors;
pub mod analytics;
pub mod args;
pub mod bootstrap;
pub mod client;
pub mod configs;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod runner;
pub mod utils;
