//! Coordinates and moves

use std::fmt;

use serde::{Deserialize, Serialize};

/// A (row, column) position on the board, both components in `[0, 2]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// True if both components fall inside the 3x3 grid
    pub fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

/// A single pawn move: source and destination squares.
///
/// A move is only meaningful relative to the board it was generated from;
/// applying it to a different board is a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    pub fn new(from: impl Into<Coord>, to: impl Into<Coord>) -> Self {
        Move {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
