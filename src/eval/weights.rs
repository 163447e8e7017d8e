//! Evaluator weights.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Result};

/// Scores for one line of three, graded by how many marks each side has.
///
/// Penalties are stored as positive magnitudes and subtracted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineWeights {
    /// Three of ours (negated for three of theirs).
    pub win: i32,

    /// Two of ours, none of theirs.
    pub two_own: i32,

    /// One of ours, none of theirs.
    pub one_own: i32,

    /// Two of theirs, none of ours.
    pub two_opp: i32,

    /// One of theirs, none of ours.
    pub one_opp: i32,
}

impl LineWeights {
    /// Weights for lines over sub-board results.
    pub const META: Self = Self {
        win: 10_000,
        two_own: 150,
        one_own: 40,
        two_opp: 170,
        one_opp: 45,
    };

    /// Weights for lines inside an undecided sub-board.
    ///
    /// A completed line would have decided the sub-board, so `win` is unused
    /// in practice.
    pub const LOCAL: Self = Self {
        win: 0,
        two_own: 15,
        one_own: 5,
        two_opp: 17,
        one_opp: 6,
    };

    /// Score a line holding `own` of our marks and `opp` of theirs.
    ///
    /// A line with both marks on it is blocked and scores zero.
    #[must_use]
    pub fn score(&self, own: usize, opp: usize) -> i32 {
        match (own, opp) {
            (3, _) => self.win,
            (_, 3) => -self.win,
            (o, t) if o > 0 && t > 0 => 0,
            (2, _) => self.two_own,
            (1, _) => self.one_own,
            (_, 2) => -self.two_opp,
            (_, 1) => -self.one_opp,
            _ => 0,
        }
    }

    /// Largest magnitude any single line can score.
    #[must_use]
    pub fn max_magnitude(&self) -> i32 {
        [self.win, self.two_own, self.one_own, self.two_opp, self.one_opp]
            .into_iter()
            .map(i32::abs)
            .max()
            .unwrap_or(0)
    }
}

/// Complete evaluator configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Lines over the meta board.
    pub meta: LineWeights,

    /// Lines inside undecided sub-boards.
    pub local: LineWeights,

    /// Score of a decided game (positive for a win, negated for a loss).
    pub terminal: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            meta: LineWeights::META,
            local: LineWeights::LOCAL,
            terminal: 1_000_000,
        }
    }
}

impl EvalWeights {
    /// Set the meta-line weights.
    pub fn with_meta(mut self, meta: LineWeights) -> Self {
        self.meta = meta;
        self
    }

    /// Set the local-line weights.
    pub fn with_local(mut self, local: LineWeights) -> Self {
        self.local = local;
        self
    }

    /// Set the terminal score.
    pub fn with_terminal(mut self, terminal: i32) -> Self {
        self.terminal = terminal;
        self
    }

    /// Upper bound on the magnitude of a non-terminal evaluation.
    #[must_use]
    pub fn max_heuristic(&self) -> i64 {
        // 8 meta lines, plus 8 lines in each of 9 sub-boards.
        8 * i64::from(self.meta.max_magnitude()) + 72 * i64::from(self.local.max_magnitude())
    }

    /// Check that a decided game outweighs any heuristic sum tenfold.
    pub fn validate(&self) -> Result<()> {
        if i64::from(self.terminal) < 10 * self.max_heuristic() {
            return Err(GameError::InvalidConfig(format!(
                "terminal score {} must be at least 10x the heuristic bound {}",
                self.terminal,
                self.max_heuristic()
            )));
        }
        Ok(())
    }
}
