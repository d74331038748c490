pub mod mock_push;

pub use gated_store::*;
pub use mock_push::*;
