//! Core engine types: players, cells, moves, errors, RNG and game state.
//!
//! `GameState` is the single owned aggregate for a position. Everything
//! else in the crate reads it, and only `GameState` itself mutates it.

pub mod error;
pub mod moves;
pub mod player;
pub mod rng;
pub mod state;

pub use error::{GameError, Result};
pub use moves::{Constraint, Move, MoveList, MoveRecord, BOARD_COUNT, CELLS_PER_BOARD, GRID_SIZE};
pub use player::{Cell, Player};
pub use rng::GameRng;
pub use state::GameState;
