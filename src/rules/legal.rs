//! Legal move enumeration under the forcing rule.
//!
//! The cell a player marks picks the sub-board the opponent must play in
//! next. When that sub-board is already decided or full, the opponent may
//! play anywhere that is still open.

use crate::core::{Constraint, GameState, Move, MoveList, BOARD_COUNT};

/// Check if a sub-board can still receive moves.
///
/// Available means undecided with at least one empty cell.
#[must_use]
pub fn is_available(state: &GameState, sub: usize) -> bool {
    sub < BOARD_COUNT && !state.result(sub).is_decided() && !state.is_sub_board_full(sub)
}

/// Constraint for the opponent after a mark at `cell` of some sub-board.
#[must_use]
pub fn next_constraint(state: &GameState, cell: usize) -> Constraint {
    if is_available(state, cell) {
        Constraint::Board(cell)
    } else {
        Constraint::Any
    }
}

/// Enumerate legal moves for `constraint`.
///
/// Moves come out in ascending (sub, cell) order. The search relies on this
/// order to break ties between equally scored moves.
///
/// A `Board(k)` constraint whose sub-board is no longer available falls back
/// to every open sub-board. This does not check whether the game as a whole
/// is decided; see `GameState::legal_moves` for that.
#[must_use]
pub fn legal_moves(state: &GameState, constraint: Constraint) -> MoveList {
    let mut moves = MoveList::new();

    if let Constraint::Board(sub) = constraint {
        if is_available(state, sub) {
            push_empty_cells(state, sub, &mut moves);
            return moves;
        }
    }

    for sub in 0..BOARD_COUNT {
        if is_available(state, sub) {
            push_empty_cells(state, sub, &mut moves);
        }
    }

    moves
}

fn push_empty_cells(state: &GameState, sub: usize, out: &mut MoveList) {
    for (cell, value) in state.sub_board(sub).iter().enumerate() {
        if value.is_empty() {
            out.push(Move::new(sub, cell));
        }
    }
}
