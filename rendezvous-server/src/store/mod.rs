mod memory_store;
mod store;
mod store_error;

pub use memory_store::*;
pub use store::*;
pub use store_error::*;
