//! Error types for the hexapawn crate

use thiserror::Error;

/// Main error type for the hexapawn crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: source square ({row}, {col}) is empty or off the board")]
    InvalidMove { row: usize, col: usize },

    #[error("no candidate moves available for board '{board}'")]
    NoCandidateMoves { board: String },

    #[error("board string too short: expected {expected} squares, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at square {position} in '{context}'")]
    InvalidSquareCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
