mod join_error;
mod join_outcome;
mod registry_config;
mod room_registry;

pub use join_error::*;
pub use join_outcome::*;
pub use registry_config::*;
pub use room_registry::*;
