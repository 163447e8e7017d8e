//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Result};
use crate::eval::EvalWeights;

/// Search depth keyed to how full the grid is.
///
/// Early positions branch widely, so they get the shallowest search; the
/// depth grows as empty cells run out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthSchedule {
    /// Depth while more than `shallow_above` cells are empty.
    pub shallow: u32,

    /// Depth while more than `medium_above` cells are empty.
    pub medium: u32,

    /// Depth for the rest of the game.
    pub deep: u32,

    /// Empty-cell threshold for the shallow band.
    pub shallow_above: usize,

    /// Empty-cell threshold for the medium band.
    pub medium_above: usize,
}

impl Default for DepthSchedule {
    fn default() -> Self {
        Self {
            shallow: 3,
            medium: 4,
            deep: 5,
            shallow_above: 60,
            medium_above: 30,
        }
    }
}

impl DepthSchedule {
    /// The same depth for the whole game.
    #[must_use]
    pub fn fixed(depth: u32) -> Self {
        Self {
            shallow: depth,
            medium: depth,
            deep: depth,
            ..Self::default()
        }
    }

    /// Depth to search with `empties` empty cells on the grid.
    #[must_use]
    pub fn depth_for(&self, empties: usize) -> u32 {
        if empties > self.shallow_above {
            self.shallow
        } else if empties > self.medium_above {
            self.medium
        } else {
            self.deep
        }
    }

    /// Check that depths are positive and never shrink as the grid fills.
    pub fn validate(&self) -> Result<()> {
        if self.shallow == 0 {
            return Err(GameError::InvalidConfig("search depth must be at least 1".into()));
        }
        if self.shallow > self.medium || self.medium > self.deep {
            return Err(GameError::InvalidConfig(format!(
                "depths must not decrease as the game progresses: {} / {} / {}",
                self.shallow, self.medium, self.deep
            )));
        }
        if self.medium_above > self.shallow_above {
            return Err(GameError::InvalidConfig(format!(
                "medium threshold {} exceeds shallow threshold {}",
                self.medium_above, self.shallow_above
            )));
        }
        Ok(())
    }
}

/// Search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Depth per game phase.
    pub schedule: DepthSchedule,

    /// Evaluator weights for cutoff positions.
    pub weights: EvalWeights,

    /// Alpha-beta cutoffs on (default) or plain exhaustive minimax.
    /// Both pick the same move; pruning only saves work.
    #[serde(default = "default_pruning")]
    pub pruning: bool,
}

fn default_pruning() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            schedule: DepthSchedule::default(),
            weights: EvalWeights::default(),
            pruning: default_pruning(),
        }
    }
}

impl SearchConfig {
    /// Set a custom depth schedule.
    pub fn with_schedule(mut self, schedule: DepthSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Search to the same depth for the whole game.
    pub fn with_fixed_depth(mut self, depth: u32) -> Self {
        self.schedule = DepthSchedule::fixed(depth);
        self
    }

    /// Set custom evaluator weights.
    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Turn alpha-beta cutoffs on or off.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Check the schedule and the weights.
    pub fn validate(&self) -> Result<()> {
        self.schedule.validate()?;
        self.weights.validate()
    }
}
