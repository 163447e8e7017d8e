//! Game state: the grid, sub-board results, constraint, turn and history.
//!
//! ## GameState
//!
//! One owned aggregate holding everything about a position:
//! - 81 cells stored as 9 sub-boards of 9 cells
//! - One result per sub-board, written as soon as it is decided
//! - The active constraint (where the player on turn may play)
//! - The player on turn
//! - Move history for exact undo
//!
//! ## Undo
//!
//! Undo does not snapshot. It pops a `MoveRecord`, clears the cell, restores
//! the constraint and turn owner from the record, and recomputes the result
//! of the one sub-board whose cells changed.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::error::{GameError, Result};
use super::moves::{Constraint, Move, MoveList, MoveRecord, BOARD_COUNT, CELLS_PER_BOARD};
use super::player::{Cell, Player};
use crate::rules::{self, Outcome};

/// Complete game state.
///
/// Cloning gives an independent copy; the search instead mutates one state
/// in place and restores it through undo.
///
/// Serializes as its move list. Deserializing replays that list through
/// `apply_move`, so an illegal or tampered log is refused with a `GameError`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MoveLog", into = "MoveLog")]
pub struct GameState {
    /// Cells by sub-board, then cell (both row-major).
    cells: [[Cell; CELLS_PER_BOARD]; BOARD_COUNT],

    /// Result of each sub-board.
    results: [Outcome; BOARD_COUNT],

    /// Where the player on turn may play.
    constraint: Constraint,

    /// Player on turn.
    to_move: Player,

    /// Applied moves, oldest first.
    history: Vec<MoveRecord>,
}

impl GameState {
    /// Create an empty grid with X to move anywhere.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; CELLS_PER_BOARD]; BOARD_COUNT],
            results: [Outcome::Undecided; BOARD_COUNT],
            constraint: Constraint::Any,
            to_move: Player::X,
            history: Vec::new(),
        }
    }

    /// Replay a sequence of moves from the empty grid, alternating players.
    ///
    /// Fails on the first move that `apply_move` rejects.
    pub fn from_moves(moves: impl IntoIterator<Item = Move>) -> Result<Self> {
        let mut state = Self::new();
        for mv in moves {
            state.apply_move(mv, state.to_move)?;
        }
        Ok(state)
    }

    /// Clear the grid and start a fresh game.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // === Accessors ===

    /// Get a cell.
    ///
    /// Panics if `sub` or `cell` is out of range.
    #[must_use]
    pub fn cell(&self, sub: usize, cell: usize) -> Cell {
        self.cells[sub][cell]
    }

    /// Get all 9 cells of a sub-board.
    #[must_use]
    pub fn sub_board(&self, sub: usize) -> &[Cell; CELLS_PER_BOARD] {
        &self.cells[sub]
    }

    /// Get the result of a sub-board.
    #[must_use]
    pub fn result(&self, sub: usize) -> Outcome {
        self.results[sub]
    }

    /// Get the results of all sub-boards (the meta board).
    #[must_use]
    pub fn results(&self) -> &[Outcome; BOARD_COUNT] {
        &self.results
    }

    /// Get the active constraint.
    #[must_use]
    pub fn constraint(&self) -> Constraint {
        self.constraint
    }

    /// Get the player on turn.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Get the move history, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Get the most recent move.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Count empty cells across the whole grid.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_empty())
            .count()
    }

    /// Check if a sub-board has no empty cell left.
    #[must_use]
    pub fn is_sub_board_full(&self, sub: usize) -> bool {
        self.cells[sub].iter().all(|cell| !cell.is_empty())
    }

    // === Rules ===

    /// Result of the whole game.
    #[must_use]
    pub fn global_result(&self) -> Outcome {
        rules::global_result(self)
    }

    /// Check if the game is decided.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.global_result().is_decided()
    }

    /// Legal moves for the player on turn.
    ///
    /// Empty once the game is decided, even if some sub-boards are open.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        if self.is_over() {
            return MoveList::new();
        }
        rules::legal_moves(self, self.constraint)
    }

    /// Check if `mv` is legal for the player on turn.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        if !mv.in_bounds() || self.is_over() {
            return false;
        }
        if !rules::is_available(self, mv.sub) || !self.cells[mv.sub][mv.cell].is_empty() {
            return false;
        }
        match self.constraint {
            Constraint::Any => true,
            Constraint::Board(k) => k == mv.sub || !rules::is_available(self, k),
        }
    }

    // === Mutation ===

    /// Apply a move for `player`.
    ///
    /// Returns the constraint for the opponent. The state is left untouched
    /// if the move is refused.
    pub fn apply_move(&mut self, mv: Move, player: Player) -> Result<Constraint> {
        if !mv.in_bounds() {
            return Err(GameError::OutOfBounds(mv));
        }
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if player != self.to_move {
            return Err(GameError::WrongTurn {
                expected: self.to_move,
                got: player,
            });
        }
        if !self.is_legal(mv) {
            return Err(GameError::IllegalMove(mv));
        }

        let constraint = self.play(mv);
        debug!(%player, %mv, ?constraint, "move applied");
        Ok(constraint)
    }

    /// Apply a move for the player on turn without validation.
    ///
    /// Callers must only pass moves from `legal_moves`.
    pub(crate) fn play(&mut self, mv: Move) -> Constraint {
        debug_assert!(self.is_legal(mv), "unchecked play of illegal move {mv}");

        let player = self.to_move;
        self.history.push(MoveRecord::new(mv, player, self.constraint));
        self.cells[mv.sub][mv.cell] = player.mark();
        self.results[mv.sub] = rules::sub_board_result(&self.cells[mv.sub]);
        self.constraint = rules::next_constraint(self, mv.cell);
        self.to_move = player.opponent();
        self.constraint
    }

    /// Take back the most recent move.
    ///
    /// Returns the removed record, or `None` if there is no history.
    pub fn undo_last_move(&mut self) -> Option<MoveRecord> {
        let Some(record) = self.history.pop() else {
            trace!("undo with empty history");
            return None;
        };

        let MoveRecord { mv, player, constraint } = record;
        self.cells[mv.sub][mv.cell] = Cell::Empty;
        self.results[mv.sub] = rules::sub_board_result(&self.cells[mv.sub]);
        self.constraint = constraint;
        self.to_move = player;
        Some(record)
    }

    /// Overwrite a sub-board and recompute its result. Leaves history alone.
    #[cfg(test)]
    pub(crate) fn load_sub_board(&mut self, sub: usize, cells: [Cell; CELLS_PER_BOARD]) {
        self.cells[sub] = cells;
        self.results[sub] = rules::sub_board_result(&self.cells[sub]);
    }

    /// Set the player on turn and the constraint directly.
    #[cfg(test)]
    pub(crate) fn force_turn(&mut self, player: Player, constraint: Constraint) {
        self.to_move = player;
        self.constraint = constraint;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire form of a `GameState`: the moves played from the empty grid.
#[derive(Serialize, Deserialize)]
struct MoveLog {
    moves: Vec<Move>,
}

impl From<GameState> for MoveLog {
    fn from(state: GameState) -> Self {
        Self {
            moves: state.history.iter().map(|record| record.mv).collect(),
        }
    }
}

impl TryFrom<MoveLog> for GameState {
    type Error = GameError;

    fn try_from(log: MoveLog) -> Result<Self> {
        Self::from_moves(log.moves)
    }
}
