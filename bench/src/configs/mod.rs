pub mod config_provider;
pub mod defaults;
pub mod displays;
pub mod test_config;
pub mod validators;
