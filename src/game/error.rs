//! Error types for engine operations.
//!
//! All of these are recoverable: the engine rejects the call, leaves its
//! state untouched and the caller can try something else.

use crate::core::{Color, ConfigError};

/// Errors that can occur when driving a game
#[derive(Debug, thiserror::Error)]
pub enum LudoError {
    /// The token cannot move with the pending roll
    #[error("{color} token {token} cannot move {die}")]
    IllegalMove { color: Color, token: usize, die: u8 },

    /// The color argument is not the color to move
    #[error("it is {expected}'s turn, not {actual}'s")]
    NotCurrentPlayer { expected: Color, actual: Color },

    /// A roll is pending and must be used or skipped first
    #[error("a die value is pending; move or skip before rolling again")]
    RollNotPermitted,

    /// The game is over
    #[error("game already won by {winner}")]
    GameAlreadyWon { winner: Color },

    /// Move or skip requested before rolling
    #[error("roll the die before moving or skipping")]
    NoPendingRoll,

    /// Skip requested while a legal move exists
    #[error("cannot skip: {count} token(s) can move")]
    MovesAvailable { count: usize },

    /// Token index does not exist
    #[error("no token with index {token}")]
    TokenOutOfRange { token: usize },

    /// Externally supplied die value is not on the die
    #[error("die value {value} is outside 1..={faces}")]
    InvalidDieValue { value: u8, faces: u8 },

    /// Rule set or starting position is unusable
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for engine operations
pub type LudoResult<T> = Result<T, LudoError>;
