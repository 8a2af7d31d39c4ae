pub mod duration;
pub mod resources;
