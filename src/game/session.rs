//! Human-vs-engine session.
//!
//! The human plays X and moves first; the engine answers as O right after
//! every human move. A front end only needs `legal_moves`, `play`,
//! `undo_turn`, `restart` and `outcome`.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::core::{GameState, Move, MoveList, Player, Result};
use crate::rules::Outcome;
use crate::search::{AlphaBeta, SearchConfig};

/// Side played by the human.
pub const HUMAN: Player = Player::X;

/// Side played by the engine.
pub const ENGINE: Player = Player::O;

/// What happened in one call to `Session::play`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The human's move.
    pub human: Move,

    /// The engine's answer, `None` if the human's move ended the game.
    pub reply: Option<Move>,

    /// Game result after both moves.
    pub outcome: Outcome,
}

/// A game between a human and the search engine.
#[derive(Clone, Debug)]
pub struct Session {
    state: GameState,
    engine: AlphaBeta,
}

impl Session {
    /// Start a fresh game with the given engine configuration.
    pub fn new(config: SearchConfig) -> Result<Self> {
        Ok(Self {
            state: GameState::new(),
            engine: AlphaBeta::new(config)?,
        })
    }

    /// Get the current position.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get the engine (for its configuration and last search statistics).
    #[must_use]
    pub fn engine(&self) -> &AlphaBeta {
        &self.engine
    }

    /// Result of the game so far.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.state.global_result()
    }

    /// Moves the human may make now.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        if self.state.to_move() != HUMAN {
            return MoveList::new();
        }
        self.state.legal_moves()
    }

    /// Play the human's move, then let the engine answer.
    ///
    /// Fails without changing anything if the human's move is refused.
    #[instrument(level = "debug", skip(self))]
    pub fn play(&mut self, mv: Move) -> Result<Turn> {
        self.state.apply_move(mv, HUMAN)?;

        let reply = if self.state.is_over() {
            None
        } else {
            self.engine.best_move(&mut self.state)
        };
        if let Some(reply) = reply {
            self.state.apply_move(reply, ENGINE)?;
        }

        let outcome = self.state.global_result();
        if outcome.is_decided() {
            info!(%outcome, plies = self.state.history().len(), "game over");
        }

        Ok(Turn {
            human: mv,
            reply,
            outcome,
        })
    }

    /// Take back the human's last move and the engine's answer to it.
    ///
    /// When the human's move ended the game there is no answer, and only
    /// the human's move is taken back. Returns `false` if the human has not
    /// moved yet.
    pub fn undo_turn(&mut self) -> bool {
        if !self.state.history().iter().any(|record| record.player == HUMAN) {
            return false;
        }

        while let Some(record) = self.state.undo_last_move() {
            if record.player == HUMAN {
                break;
            }
        }
        true
    }

    /// Throw the game away and start over.
    pub fn restart(&mut self) {
        self.state.reset();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self {
            state: GameState::new(),
            engine: AlphaBeta::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Constraint, GameError};

    fn session() -> Session {
        Session::new(SearchConfig::default().with_fixed_depth(2)).unwrap()
    }

    #[test]
    fn test_play_gets_reply_in_forced_board() {
        let mut session = session();

        let turn = session.play(Move::new(4, 4)).unwrap();

        let reply = turn.reply.unwrap();
        assert_eq!(reply.sub, 4);
        assert_eq!(turn.outcome, Outcome::Undecided);
        assert_eq!(session.state().history().len(), 2);
        assert_eq!(session.state().to_move(), HUMAN);
    }

    #[test]
    fn test_illegal_human_move_changes_nothing() {
        let mut session = session();
        session.play(Move::new(0, 0)).unwrap();
        let before = session.state().clone();

        let forced = match before.constraint() {
            Constraint::Board(k) => k,
            Constraint::Any => unreachable!("engine reply always forces a board on move 2"),
        };
        let elsewhere = Move::new((forced + 1) % 9, 0);
        let err = session.play(elsewhere);

        assert!(matches!(err, Err(GameError::IllegalMove(_))));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_undo_turn_removes_both_moves() {
        let mut session = session();
        session.play(Move::new(4, 4)).unwrap();
        let before = session.state().clone();

        let mv = session.legal_moves()[0];
        session.play(mv).unwrap();

        assert!(session.undo_turn());
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_undo_turn_after_winning_human_move() {
        const E: Cell = Cell::Empty;
        const X: Cell = Cell::X;
        const O: Cell = Cell::O;

        // X holds sub-boards 0 and 1 and is sent to sub-board 2 with two in
        // a row; cell 2 wins the top meta row.
        let mut session = session();
        session.state.load_sub_board(0, [X, X, X, O, O, E, E, E, E]);
        session.state.load_sub_board(1, [X, X, X, O, O, E, E, E, E]);
        session.state.load_sub_board(2, [X, X, E, O, O, E, E, E, E]);
        session.state.force_turn(HUMAN, Constraint::Board(2));
        let before = session.state().clone();

        let turn = session.play(Move::new(2, 2)).unwrap();
        assert_eq!(turn.reply, None);
        assert_eq!(turn.outcome, Outcome::Won(HUMAN));

        assert!(session.undo_turn());
        assert_eq!(session.state(), &before);
        assert_eq!(session.state().to_move(), HUMAN);
        assert_eq!(session.outcome(), Outcome::Undecided);
    }

    #[test]
    fn test_undo_turn_without_moves() {
        let mut session = session();
        assert!(!session.undo_turn());
        assert_eq!(session.state(), &GameState::new());
    }

    #[test]
    fn test_restart() {
        let mut session = session();
        session.play(Move::new(2, 2)).unwrap();

        session.restart();

        assert_eq!(session.state(), &GameState::new());
        assert_eq!(session.legal_moves().len(), 81);
    }
}
