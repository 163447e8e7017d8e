//! Heuristic evaluator.

use crate::core::{Cell, GameState, Player, BOARD_COUNT};
use crate::rules::{Outcome, WIN_LINES};

use super::weights::EvalWeights;

/// Static evaluator over a read-only `GameState`.
///
/// ```
/// use ultimate_ttt::core::GameState;
/// use ultimate_ttt::eval::Heuristic;
///
/// let heuristic = Heuristic::default();
/// assert_eq!(heuristic.evaluate(&GameState::new()), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Heuristic {
    weights: EvalWeights,
}

impl Heuristic {
    /// Create an evaluator with the given weights.
    #[must_use]
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    /// Score `state` from O's point of view.
    #[must_use]
    pub fn evaluate(&self, state: &GameState) -> i32 {
        self.evaluate_for(state, Player::O)
    }

    /// Score `state` from `pov`'s point of view.
    ///
    /// Not antisymmetric: threats are weighted heavier than chances, so
    /// `evaluate_for(s, X)` is generally not `-evaluate_for(s, O)`.
    #[must_use]
    pub fn evaluate_for(&self, state: &GameState, pov: Player) -> i32 {
        match state.global_result() {
            Outcome::Won(winner) if winner == pov => return self.weights.terminal,
            Outcome::Won(_) => return -self.weights.terminal,
            Outcome::Tie => return 0,
            Outcome::Undecided => {}
        }

        self.meta_score(state, pov) + self.local_score(state, pov)
    }

    /// Lines over the sub-board results. Tied sub-boards count for nobody.
    fn meta_score(&self, state: &GameState, pov: Player) -> i32 {
        let results = state.results();
        WIN_LINES
            .iter()
            .map(|line| {
                let own = line.iter().filter(|&&i| results[i].is_winner(pov)).count();
                let opp = line
                    .iter()
                    .filter(|&&i| results[i].is_winner(pov.opponent()))
                    .count();
                self.weights.meta.score(own, opp)
            })
            .sum()
    }

    /// Lines inside each undecided sub-board. Decided sub-boards are already
    /// counted through the meta lines.
    fn local_score(&self, state: &GameState, pov: Player) -> i32 {
        (0..BOARD_COUNT)
            .filter(|&sub| !state.result(sub).is_decided())
            .map(|sub| self.sub_board_score(state.sub_board(sub), pov))
            .sum()
    }

    fn sub_board_score(&self, cells: &[Cell; 9], pov: Player) -> i32 {
        let own_mark = pov.mark();
        let opp_mark = pov.opponent().mark();
        WIN_LINES
            .iter()
            .map(|line| {
                let own = line.iter().filter(|&&i| cells[i] == own_mark).count();
                let opp = line.iter().filter(|&&i| cells[i] == opp_mark).count();
                self.weights.local.score(own, opp)
            })
            .sum()
    }
}
