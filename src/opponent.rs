//! MENACE-style adaptive opponent
//!
//! The opponent keeps an associative memory from board values to the moves
//! it is still willing to consider, chooses uniformly at random among them,
//! and learns by pruning moves that led to a loss.

pub mod agent;
pub mod history;
pub mod memory;

pub use agent::AdaptiveOpponent;
pub use history::{MatchHistory, PlayedMove};
pub use memory::{MemorySnapshot, MemoryTable};
