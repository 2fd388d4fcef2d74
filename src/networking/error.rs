//! Error types for the relay protocol

use thiserror::Error;

use crate::game::GameError;

#[derive(Error, Debug)]
pub enum RelayError {
    /// Message could not be encoded or decoded
    #[error("Relay codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// A received move was rejected by the local session
    #[error("Remote move rejected: {0}")]
    Game(#[from] GameError),
}

pub type RelayResult<T> = Result<T, RelayError>;
