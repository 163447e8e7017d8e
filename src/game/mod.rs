//! Playing games: agents, self-play and the human-vs-engine session.
//!
//! - `Agent`: anything that picks a move for the side to move
//! - `RandomAgent`: uniform over legal moves, seeded for reproducibility
//! - `play_match`: run two agents against each other to the end
//! - `Session`: the controller a front end drives; a human move followed by
//!   the engine's reply, paired undo and restart

mod agent;
mod session;

pub use agent::{play_match, Agent, RandomAgent};
pub use session::{Session, Turn, ENGINE, HUMAN};
