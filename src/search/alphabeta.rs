//! Alpha-beta minimax over a mutable `GameState`.
//!
//! The recursion applies each candidate move with `GameState::play`,
//! recurses, and undoes it before looking at the next one. Every exit path,
//! cutoffs included, leaves the state and its history as they were.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{GameState, Move, Player, Result};
use crate::eval::Heuristic;
use crate::rules;

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Score and chosen move of a (sub)search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Minimax score from O's point of view.
    pub score: i32,

    /// Best move for the side to move, `None` at leaves.
    pub best_move: Option<Move>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Alpha-beta search context.
///
/// Owns the configuration, the evaluator and the statistics of the last
/// search. Holds no game state between calls.
#[derive(Clone, Debug)]
pub struct AlphaBeta {
    config: SearchConfig,
    heuristic: Heuristic,
    stats: SearchStats,
}

impl AlphaBeta {
    /// Create a search context, rejecting an invalid configuration.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            heuristic: Heuristic::new(config.weights),
            config,
            stats: SearchStats::default(),
        })
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best move for the side to move, searched to the scheduled depth.
    ///
    /// Returns `None` if the game is over or no move is available.
    pub fn best_move(&mut self, state: &mut GameState) -> Option<Move> {
        let depth = self.config.schedule.depth_for(state.empty_count());
        self.search(state, depth).best_move
    }

    /// Search `state` to a fixed depth with a full window.
    #[instrument(level = "debug", skip(self, state))]
    pub fn search(&mut self, state: &mut GameState, depth: u32) -> SearchResult {
        let start = Instant::now();
        self.stats.reset();
        self.stats.depth = depth;

        let result = self.alphabeta(state, depth, i32::MIN, i32::MAX);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            to_move = %state.to_move(),
            score = result.score,
            best_move = ?result.best_move,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            nps = self.stats.nodes_per_second(),
            "search complete"
        );
        result
    }

    fn alphabeta(
        &mut self,
        state: &mut GameState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchResult {
        self.stats.nodes += 1;

        if depth == 0 || state.is_over() {
            return self.evaluate(state);
        }

        let moves = rules::legal_moves(state, state.constraint());
        if moves.is_empty() {
            return self.evaluate(state);
        }

        let maximizing = state.to_move() == Player::O;
        let mut best = SearchResult::leaf(if maximizing { i32::MIN } else { i32::MAX });

        for mv in moves {
            state.play(mv);
            let score = self.alphabeta(state, depth - 1, alpha, beta).score;
            state.undo_last_move();

            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        score,
                        best_move: Some(mv),
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        score,
                        best_move: Some(mv),
                    };
                }
                beta = beta.min(best.score);
            }

            if self.config.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    fn evaluate(&mut self, state: &GameState) -> SearchResult {
        self.stats.leaves += 1;
        SearchResult::leaf(self.heuristic.evaluate(state))
    }
}

impl Default for AlphaBeta {
    fn default() -> Self {
        let config = SearchConfig::default();
        Self {
            heuristic: Heuristic::new(config.weights),
            config,
            stats: SearchStats::default(),
        }
    }
}
