pub mod outcome;
pub mod snapshot;
pub mod store;
