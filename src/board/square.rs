//! Square contents and side-of-play perspective

use serde::{Deserialize, Serialize};

/// Contents of one square on the 3x3 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    Empty,
    Player,
    Opponent,
}

impl Square {
    pub fn to_char(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Player => 'P',
            Square::Opponent => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Square> {
        match c {
            '.' | ' ' => Some(Square::Empty),
            'P' | 'p' => Some(Square::Player),
            'O' | 'o' => Some(Square::Opponent),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }

    /// True if this square holds a pawn belonging to `side`.
    ///
    /// Perspective-aware replacement for comparing raw cell values: callers
    /// ask "is this the mover's pawn" or "is this the defender's pawn"
    /// instead of matching on the enum directly.
    pub fn is_pawn_of(self, side: Side) -> bool {
        self == side.to_square()
    }

    /// The side owning the pawn on this square, if any
    pub fn side(self) -> Option<Side> {
        match self {
            Square::Player => Some(Side::Player),
            Square::Opponent => Some(Side::Opponent),
            Square::Empty => None,
        }
    }
}

/// A side in the game: the human player or the adaptive opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Convert side to the square its pawns occupy
    pub fn to_square(self) -> Square {
        match self {
            Side::Player => Square::Player,
            Side::Opponent => Square::Opponent,
        }
    }

    /// Row delta for one forward step: the player advances toward row 0,
    /// the opponent toward row 2.
    pub fn forward(self) -> isize {
        match self {
            Side::Player => -1,
            Side::Opponent => 1,
        }
    }

    /// Edge row where this side's pawns start
    pub fn home_row(self) -> usize {
        match self {
            Side::Player => 2,
            Side::Opponent => 0,
        }
    }

    /// Edge row this side is trying to reach (the other side's home edge)
    pub fn goal_row(self) -> usize {
        self.other().home_row()
    }
}
