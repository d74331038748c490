mod push_delivery;
mod registration_endpoint;
mod registration_error;
mod signaling_service;
mod ws_handler;

pub use push_delivery::*;
pub use registration_endpoint::*;
pub use registration_error::*;
pub use signaling_service::*;
pub use ws_handler::*;
