//! Move-choosing agents and self-play.

use tracing::debug;

use crate::core::{GameRng, GameState, Move, Player, Result};
use crate::rules::Outcome;
use crate::search::AlphaBeta;

/// Picks a move for the side to move.
///
/// Takes the state mutably so searching agents can apply and undo moves in
/// place; implementations must hand it back unchanged.
pub trait Agent {
    /// Choose a legal move, or `None` if there is none.
    fn choose_move(&mut self, state: &mut GameState) -> Option<Move>;
}

impl Agent for AlphaBeta {
    fn choose_move(&mut self, state: &mut GameState) -> Option<Move> {
        self.best_move(state)
    }
}

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create an agent with its own seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create an agent drawing from a fork of an existing RNG.
    #[must_use]
    pub fn from_rng(rng: &mut GameRng) -> Self {
        Self { rng: rng.fork() }
    }
}

impl Agent for RandomAgent {
    fn choose_move(&mut self, state: &mut GameState) -> Option<Move> {
        let moves = state.legal_moves();
        self.rng.choose(&moves).copied()
    }
}

/// Play `x` against `o` from `state` until the game is decided.
///
/// Stops early if an agent has no move. Fails only if an agent returns an
/// illegal move.
pub fn play_match(state: &mut GameState, x: &mut dyn Agent, o: &mut dyn Agent) -> Result<Outcome> {
    while !state.is_over() {
        let player = state.to_move();
        let agent: &mut dyn Agent = match player {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };

        let Some(mv) = agent.choose_move(state) else {
            break;
        };
        state.apply_move(mv, player)?;
    }

    let outcome = state.global_result();
    debug!(%outcome, plies = state.history().len(), "match finished");
    Ok(outcome)
}
