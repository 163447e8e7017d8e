//! Result of a sub-board or of the whole game.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Result of a sub-board or of the whole game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Still being played.
    #[default]
    Undecided,
    /// Three in a row for this player.
    Won(Player),
    /// Finished without a winner.
    Tie,
}

impl Outcome {
    /// Check if the result is final.
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    /// The winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::Undecided | Outcome::Tie => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self.winner() == Some(player)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "undecided"),
            Outcome::Won(player) => write!(f, "{player} wins"),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}
