//! Hexapawn board representation and rules engine

pub mod grid;
pub mod moves;
pub mod rules;
pub mod square;

pub use grid::Board;
pub use moves::{Coord, Move};
pub use rules::{
    Outcome, apply_move, classify, legal_moves, legal_opponent_moves, legal_player_moves,
};
pub use square::{Side, Square};
