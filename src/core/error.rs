use thiserror::Error;

use super::moves::Move;
use super::player::Player;

/// Errors reported by the game engine.
///
/// Decided sub-boards, full boards and finished games are ordinary state,
/// not errors. These variants only cover requests the engine refuses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("move {0} is off the grid")]
    OutOfBounds(Move),

    #[error("move {0} is not legal in this position")]
    IllegalMove(Move),

    #[error("it is {expected}'s turn, not {got}'s")]
    WrongTurn { expected: Player, got: Player },

    #[error("the game is already over")]
    GameOver,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience Result type for engine operations
pub type Result<T> = std::result::Result<T, GameError>;
