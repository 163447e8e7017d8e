//! Depth-limited minimax search with alpha-beta pruning.
//!
//! ## Overview
//!
//! - **Fixed perspective**: scores are O's point of view; O maximizes and X
//!   minimizes (plain minimax, not negamax)
//! - **Depth schedule**: depth picked once per search from the number of
//!   empty cells, deeper as the grid fills up
//! - **In-place**: the search applies and undoes moves on the caller's
//!   `GameState` and leaves it exactly as found
//! - **Deterministic**: moves are tried in ascending (sub, cell) order and
//!   only a strictly better score replaces the current best
//!
//! ## Usage
//!
//! ```rust
//! use ultimate_ttt::core::{GameState, Move, Player};
//! use ultimate_ttt::search::{AlphaBeta, SearchConfig};
//!
//! let mut state = GameState::new();
//! state.apply_move(Move::new(4, 4), Player::X).unwrap();
//!
//! let mut search = AlphaBeta::new(SearchConfig::default().with_fixed_depth(2)).unwrap();
//! let reply = search.best_move(&mut state).unwrap();
//!
//! // X's centre mark sends O to the centre sub-board.
//! assert_eq!(reply.sub, 4);
//! println!("searched {} nodes", search.stats().nodes);
//! ```

pub mod alphabeta;
pub mod config;
pub mod stats;

pub use alphabeta::{AlphaBeta, SearchResult};
pub use config::{DepthSchedule, SearchConfig};
pub use stats::SearchStats;
