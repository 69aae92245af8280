//! Hexapawn rules engine with a MENACE-style adaptive opponent
//!
//! This crate provides:
//! - Complete Hexapawn rules engine: legal-move generation, move application,
//!   and terminal-state classification over immutable board values
//! - An adaptive opponent that learns purely by pruning moves that led to a
//!   loss, with no search, heuristics, or evaluation function
//! - Optional JSON persistence for the opponent's learned memory
//!
//! The match loop itself (alternating turns, rendering, reading human input)
//! is left to the host application; this crate supplies the game logic and
//! the learning opponent it drives.

pub mod board;
pub mod error;
pub mod opponent;

pub use board::{
    Board, Coord, Move, Outcome, Side, Square, apply_move, classify, legal_opponent_moves,
    legal_player_moves,
};
pub use error::{Error, Result};
pub use opponent::{AdaptiveOpponent, MatchHistory, MemoryTable, PlayedMove};
