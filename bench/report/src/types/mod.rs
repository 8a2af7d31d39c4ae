pub mod hardware;
pub mod latency;
pub mod params;
pub mod report;
pub mod resources;
