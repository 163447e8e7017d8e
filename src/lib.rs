//! # ultimate-ttt
//!
//! Ultimate tic-tac-toe engine with a depth-limited alpha-beta search.
//!
//! ## The Game
//!
//! Nine tic-tac-toe boards sit in a 3x3 grid. The cell a player marks sends
//! the opponent to the sub-board at the same position; if that sub-board is
//! already won or full, the opponent may play in any open one. Winning a
//! sub-board claims its slot on the meta board, and three claimed slots in a
//! row win the game.
//!
//! ## Design Principles
//!
//! 1. **One Owned State**: `GameState` holds grid, sub-board results,
//!    constraint, turn and history. No globals.
//!
//! 2. **Undo by Recomputation**: undo restores the cell, constraint and turn
//!    from the history record and recomputes the one affected sub-board
//!    result. No snapshots.
//!
//! 3. **Checked Entry, Unchecked Search**: `GameState::apply_move` validates
//!    and returns a `GameError` on refusal; the search plays moves straight
//!    from `legal_moves`.
//!
//! ## Modules
//!
//! - `core`: Players, cells, moves, errors, RNG, game state
//! - `rules`: Sub-board and game results, legal moves, forcing rule
//! - `eval`: Heuristic evaluator and its weights
//! - `search`: Alpha-beta search, depth schedule, statistics
//! - `game`: Agents, self-play, human-vs-engine session

pub mod core;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Cell, Constraint, GameError, GameRng, GameState, Move, MoveList, MoveRecord, Player, Result,
};

pub use crate::rules::{global_result, legal_moves, sub_board_result, Outcome};

pub use crate::eval::{EvalWeights, Heuristic, LineWeights};

pub use crate::search::{AlphaBeta, DepthSchedule, SearchConfig, SearchResult, SearchStats};

pub use crate::game::{play_match, Agent, RandomAgent, Session, Turn};
