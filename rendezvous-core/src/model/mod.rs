mod client;
mod connection;
mod ids;
mod room;
mod signaling;

pub use client::Client;
pub use connection::Connection;
pub use ids::{ClientId, ConnectionId, RoomId};
pub use room::{ROOM_CAPACITY, Room, has_capacity};
pub use signaling::{RegisterCommand, RegisterResult, ResultKind};
