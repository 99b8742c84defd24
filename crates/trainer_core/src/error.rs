//! Error types for the trainer core
//!
//! Every failure the engines can surface to a caller. None of these are
//! retried or recovered internally; they propagate unchanged.

use cozy_chess::Move;
use thiserror::Error;

/// Errors raised by the rules adapter, the search, or configuration loading.
#[derive(Error, Debug)]
pub enum TrainerError {
    /// Search was requested on a position that has no legal moves or is
    /// already decided (checkmate, stalemate, or any other draw).
    #[error("no moves available: the game is over")]
    GameOver,

    /// The rules engine rejected a board-notation string.
    #[error("invalid position {fen:?}: {reason}")]
    InvalidPosition { fen: String, reason: String },

    /// A move produced by legal-move enumeration could not be applied.
    /// The rules engine is misbehaving; the search branch is aborted.
    #[error("move {mv} failed to apply in position {fen}")]
    IllegalMove { mv: Move, fen: String },

    /// Move text did not name a legal move in the current position.
    #[error("move {text:?} is not legal in position {fen}")]
    InvalidMoveText { text: String, fen: String },

    /// Difficulty index outside the 1..=8 table.
    #[error("unknown difficulty level {0} (expected 1-8)")]
    UnknownDifficulty(u8),

    /// Configuration file could not be parsed or failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for trainer operations
pub type Result<T> = std::result::Result<T, TrainerError>;

impl From<toml::de::Error> for TrainerError {
    fn from(err: toml::de::Error) -> Self {
        TrainerError::Config(err.to_string())
    }
}
