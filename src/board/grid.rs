//! Board value type

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    moves::Coord,
    square::{Side, Square},
};

/// Complete board state: a fixed 3-row by 3-column grid of squares.
///
/// Row 0 is the opponent's home edge (the player's goal line); row 2 is the
/// player's home edge (the opponent's goal line).
///
/// Boards are value types: `Copy` (9 bytes), compared and hashed by their
/// square contents, so two boards with identical squares are the same
/// memory-table key regardless of identity. There is no in-place mutation
/// API; rules-engine operations produce fresh boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; 3]; 3],
}

impl Board {
    pub fn new(squares: [[Square; 3]; 3]) -> Self {
        Board { squares }
    }

    /// Starting position: opponent pawns across row 0, player pawns across row 2
    pub fn initial() -> Self {
        let mut squares = [[Square::Empty; 3]; 3];
        squares[Side::Opponent.home_row()] = [Square::Opponent; 3];
        squares[Side::Player.home_row()] = [Square::Player; 3];
        Board { squares }
    }

    /// Get the square at a coordinate
    pub fn get(&self, at: Coord) -> Square {
        self.squares[at.row][at.col]
    }

    /// Return a copy of this board with `at` replaced by `square`
    #[must_use = "with returns a new board; the original is unchanged"]
    pub(crate) fn with(&self, at: Coord, square: Square) -> Board {
        let mut next = *self;
        next.squares[at.row][at.col] = square;
        next
    }

    /// True if `side` has a pawn anywhere on `row`
    pub fn has_pawn_on_row(&self, side: Side, row: usize) -> bool {
        self.squares[row].iter().any(|&s| s.is_pawn_of(side))
    }

    /// True if `side` has any pawn left on the board
    pub fn has_pawns(&self, side: Side) -> bool {
        self.squares
            .iter()
            .flatten()
            .any(|&s| s.is_pawn_of(side))
    }

    /// Create a board from a 9-character string representation, row by row
    /// from row 0. Whitespace is filtered out, so both `"OOO...PPP"` and a
    /// three-line layout parse to the same board.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 non-whitespace characters remain or any
    /// character is not a valid square representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut squares = [[Square::Empty; 3]; 3];
        for (i, &c) in chars.iter().take(9).enumerate() {
            squares[i / 3][i % 3] =
                Square::from_char(c).ok_or_else(|| crate::Error::InvalidSquareCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        Ok(Board { squares })
    }

    /// Get the flattened 9-character representation, suitable as a
    /// persistence key. Inverse of [`Board::from_string`].
    pub fn encode(&self) -> String {
        self.squares
            .iter()
            .flatten()
            .map(|&s| s.to_char())
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.squares.iter().enumerate() {
            for &square in row {
                write!(f, "{}", square.to_char())?;
            }
            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
