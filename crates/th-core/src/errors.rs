//! Error types for game operations
//!
//! Refused trades and bad menu choices are ordinary game outcomes and are
//! reported as text. Only faults the game cannot recover from in-turn end
//! up here.

use thiserror::Error;

/// Errors raised by game operations
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Could not read player input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown mode '{0}'")]
    UnknownMode(String),
}
