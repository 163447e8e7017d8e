//! Rule engine for ultimate tic-tac-toe.
//!
//! Pure functions over a `GameState`:
//! - Win/draw detection for a single sub-board and for the meta board
//! - Legal move enumeration under the forcing rule
//!
//! `GameState` calls into these after every move and undo; the search and
//! the evaluator call them read-only.

pub mod legal;
pub mod lines;
pub mod outcome;

pub use legal::{is_available, legal_moves, next_constraint};
pub use lines::{global_result, sub_board_result, WIN_LINES};
pub use outcome::Outcome;
