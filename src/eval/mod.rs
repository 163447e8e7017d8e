//! Static position evaluation used at search cutoffs.
//!
//! Scores are always from one fixed point of view (O by default): positive
//! is good for O, negative is good for X. The search maximizes on O's turns
//! and minimizes on X's turns against this same score.
//!
//! ## Terms
//!
//! - **Meta lines**: each of the 8 lines over the sub-board results
//! - **Local lines**: each of the 8 lines inside every undecided sub-board
//!
//! Opponent threats weigh more than own threats of the same size.

pub mod heuristic;
pub mod weights;

pub use heuristic::Heuristic;
pub use weights::{EvalWeights, LineWeights};
