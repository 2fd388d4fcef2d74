//! Multiplayer relay messages
//!
//! - `protocol` - [`RelayMessage`] and its JSON encoding
//! - `relay` - Applying received messages to a [`crate::game::Session`]
//! - `error` - [`RelayError`]

pub mod error;
pub mod protocol;
pub mod relay;

pub use error::{RelayError, RelayResult};
pub use protocol::RelayMessage;
pub use relay::handle_relay_message;
