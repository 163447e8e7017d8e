//! Move representation: a (sub-board, cell) pair plus history records.
//!
//! The grid is addressed at two levels, both row-major:
//! - `sub`: which of the 9 sub-boards (0 = top-left, 8 = bottom-right)
//! - `cell`: which cell inside that sub-board, same numbering

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Player;

/// Number of sub-boards on the grid.
pub const BOARD_COUNT: usize = 9;

/// Number of cells in each sub-board.
pub const CELLS_PER_BOARD: usize = 9;

/// Total number of cells on the grid.
pub const GRID_SIZE: usize = BOARD_COUNT * CELLS_PER_BOARD;

/// A move: place the mover's mark at `cell` of sub-board `sub`.
///
/// The cell index also names the sub-board the opponent is sent to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Sub-board index (0-8).
    pub sub: usize,

    /// Cell index within the sub-board (0-8).
    pub cell: usize,
}

impl Move {
    /// Create a move. Bounds are checked when the move is applied.
    #[must_use]
    pub const fn new(sub: usize, cell: usize) -> Self {
        Self { sub, cell }
    }

    /// Check that both coordinates address a real cell.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.sub < BOARD_COUNT && self.cell < CELLS_PER_BOARD
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.sub, self.cell)
    }
}

/// Legal move list.
///
/// A forced sub-board never offers more than 9 moves, so the common case
/// stays inline.
pub type MoveList = SmallVec<[Move; CELLS_PER_BOARD]>;

/// Where the player on turn is allowed to play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Constraint {
    /// Any cell of any undecided sub-board with space left.
    #[default]
    Any,
    /// Only the given sub-board.
    Board(usize),
}

impl Constraint {
    /// Check if the constraint admits moves in `sub`.
    ///
    /// Does not look at the board: a `Board(k)` that no longer qualifies is
    /// handled by the rules, which relax it to `Any`.
    #[must_use]
    pub fn permits(self, sub: usize) -> bool {
        match self {
            Constraint::Any => true,
            Constraint::Board(k) => k == sub,
        }
    }
}

/// A move as stored in the game history.
///
/// Carries everything undo needs to restore the previous position besides
/// the sub-board result, which is recomputed from the cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move played.
    pub mv: Move,

    /// Who played it. Also the turn owner before the move.
    pub player: Player,

    /// Active constraint before the move.
    pub constraint: Constraint,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(mv: Move, player: Player, constraint: Constraint) -> Self {
        Self {
            mv,
            player,
            constraint,
        }
    }
}
