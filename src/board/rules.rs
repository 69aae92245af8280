//! Legal-move generation, move application, and outcome classification.
//!
//! Every operation here is a pure function over board values: no shared
//! state, no side effects.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    grid::Board,
    moves::{Coord, Move},
    square::{Side, Square},
};

/// Classification of a board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    PlayerWins,
    OpponentWins,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }

    /// The winning side, if the game is over
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::PlayerWins => Some(Side::Player),
            Outcome::OpponentWins => Some(Side::Opponent),
            Outcome::Ongoing => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Ongoing => "ongoing",
            Outcome::PlayerWins => "player wins",
            Outcome::OpponentWins => "opponent wins",
        };
        f.write_str(label)
    }
}

/// Rows a side's pawns are scanned from, own home edge first. A pawn on the
/// goal edge is never scanned; reaching it already ended the game.
fn scan_rows(side: Side) -> [usize; 2] {
    match side {
        Side::Player => [2, 1],
        Side::Opponent => [0, 1],
    }
}

/// Generate all legal moves for `side`.
///
/// Pawns are scanned from the side's own home edge toward the goal edge,
/// columns left to right; each pawn emits its diagonal-left capture, straight
/// advance, and diagonal-right capture, in that order. The resulting ordering
/// is deterministic and reproducible, which presentation layers and tests
/// rely on.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::new();
    for row in scan_rows(side) {
        let ahead = (row as isize + side.forward()) as usize;
        for col in 0..3 {
            let from = Coord::new(row, col);
            if !board.get(from).is_pawn_of(side) {
                continue;
            }
            if col > 0 {
                let left = Coord::new(ahead, col - 1);
                if board.get(left).is_pawn_of(side.other()) {
                    out.push(Move { from, to: left });
                }
            }
            let forward = Coord::new(ahead, col);
            if board.get(forward).is_empty() {
                out.push(Move { from, to: forward });
            }
            if col < 2 {
                let right = Coord::new(ahead, col + 1);
                if board.get(right).is_pawn_of(side.other()) {
                    out.push(Move { from, to: right });
                }
            }
        }
    }
    out
}

/// Legal moves for the player, who advances toward row 0
pub fn legal_player_moves(board: &Board) -> Vec<Move> {
    legal_moves(board, Side::Player)
}

/// Legal moves for the opponent, who advances toward row 2
pub fn legal_opponent_moves(board: &Board) -> Vec<Move> {
    legal_moves(board, Side::Opponent)
}

/// Apply `mv` to `board`, returning the resulting board with the source
/// square cleared and the destination holding the source's prior content.
///
/// # Errors
///
/// Returns [`Error::InvalidMove`](crate::Error::InvalidMove) if the source
/// square is empty or either coordinate falls off the grid. This is a
/// defensive check: callers are expected to only apply moves drawn from the
/// legal-move generators, so hitting it signals a caller bug rather than a
/// recoverable game condition.
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, crate::Error> {
    if !mv.from.in_bounds() || !mv.to.in_bounds() {
        return Err(crate::Error::InvalidMove {
            row: mv.from.row,
            col: mv.from.col,
        });
    }

    let moving = board.get(mv.from);
    if moving.is_empty() {
        return Err(crate::Error::InvalidMove {
            row: mv.from.row,
            col: mv.from.col,
        });
    }

    Ok(board.with(mv.from, Square::Empty).with(mv.to, moving))
}

/// Classify a board as ongoing or won by a side.
///
/// Conditions are evaluated in fixed priority order; the first match wins.
/// Breakthrough checks come before pawn-count checks so a side that already
/// reached the far edge is credited regardless of material:
///
/// 1. Any player pawn on row 0 (the opponent's home edge) — player wins.
/// 2. Any opponent pawn on row 2 (the player's home edge) — opponent wins.
/// 3. No opponent pawns remain — player wins.
/// 4. No player pawns remain — opponent wins.
/// 5. Opponent to move with no legal move — player wins (stalemate).
/// 6. Player to move with no legal move — opponent wins.
/// 7. Otherwise the game is ongoing.
pub fn classify(board: &Board, opponent_to_move: bool) -> Outcome {
    if board.has_pawn_on_row(Side::Player, Side::Player.goal_row()) {
        return Outcome::PlayerWins;
    }
    if board.has_pawn_on_row(Side::Opponent, Side::Opponent.goal_row()) {
        return Outcome::OpponentWins;
    }
    if !board.has_pawns(Side::Opponent) {
        return Outcome::PlayerWins;
    }
    if !board.has_pawns(Side::Player) {
        return Outcome::OpponentWins;
    }
    if opponent_to_move && legal_opponent_moves(board).is_empty() {
        return Outcome::PlayerWins;
    }
    if !opponent_to_move && legal_player_moves(board).is_empty() {
        return Outcome::OpponentWins;
    }
    Outcome::Ongoing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_player_moves() {
        let board = Board::initial();
        // Row 2 scanned first, left to right; only straight advances exist
        assert_eq!(
            legal_player_moves(&board),
            vec![
                Move::new((2, 0), (1, 0)),
                Move::new((2, 1), (1, 1)),
                Move::new((2, 2), (1, 2)),
            ]
        );
    }

    #[test]
    fn test_opening_opponent_moves() {
        let board = Board::initial();
        assert_eq!(
            legal_opponent_moves(&board),
            vec![
                Move::new((0, 0), (1, 0)),
                Move::new((0, 1), (1, 1)),
                Move::new((0, 2), (1, 2)),
            ]
        );
    }

    #[test]
    fn test_capture_emission_order() {
        // Player pawn at (2, 1) with opponent pawns on both forward diagonals
        // and an empty square straight ahead: capture-left, advance,
        // capture-right, in that order.
        let board = Board::from_string("...O.O.P.").unwrap();
        assert_eq!(
            legal_player_moves(&board),
            vec![
                Move::new((2, 1), (1, 0)),
                Move::new((2, 1), (1, 1)),
                Move::new((2, 1), (1, 2)),
            ]
        );
    }

    #[test]
    fn test_no_advance_into_occupied_square() {
        // Opponent pawn directly ahead blocks the advance and cannot be
        // captured head-on.
        let board = Board::from_string("....O..P.").unwrap();
        assert_eq!(legal_player_moves(&board), Vec::new());
    }

    #[test]
    fn test_generators_never_target_own_pawns() {
        let board = Board::from_string("OOO.P.PPP").unwrap();
        for mv in legal_player_moves(&board) {
            assert!(
                !board.get(mv.to).is_pawn_of(Side::Player),
                "player move {mv} lands on its own pawn"
            );
            assert!(board.get(mv.from).is_pawn_of(Side::Player));
        }
        for mv in legal_opponent_moves(&board) {
            assert!(
                !board.get(mv.to).is_pawn_of(Side::Opponent),
                "opponent move {mv} lands on its own pawn"
            );
            assert!(board.get(mv.from).is_pawn_of(Side::Opponent));
        }
    }

    #[test]
    fn test_apply_move() {
        let board = Board::initial();
        let next = apply_move(&board, Move::new((2, 0), (1, 0))).unwrap();
        assert_eq!(next.get(Coord::new(2, 0)), Square::Empty);
        assert_eq!(next.get(Coord::new(1, 0)), Square::Player);
        // Original board is untouched
        assert_eq!(board.get(Coord::new(2, 0)), Square::Player);
    }

    #[test]
    fn test_apply_move_capture_replaces_destination() {
        let board = Board::from_string("...O...P.").unwrap();
        let next = apply_move(&board, Move::new((2, 1), (1, 0))).unwrap();
        assert_eq!(next.get(Coord::new(1, 0)), Square::Player);
        assert!(!next.has_pawns(Side::Opponent));
    }

    #[test]
    fn test_apply_move_rejects_empty_source() {
        let board = Board::initial();
        let err = apply_move(&board, Move::new((1, 1), (0, 1))).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidMove { row: 1, col: 1 }
        ));
    }

    #[test]
    fn test_apply_move_rejects_off_board_coordinates() {
        let board = Board::initial();
        assert!(apply_move(&board, Move::new((3, 0), (2, 0))).is_err());
        assert!(apply_move(&board, Move::new((2, 0), (2, 3))).is_err());
    }

    #[test]
    fn test_classify_priority_order() {
        // Player pawn on row 0 wins even with opponent material everywhere
        let board = Board::from_string("POO.O...O").unwrap();
        assert_eq!(classify(&board, true), Outcome::PlayerWins);
        assert_eq!(classify(&board, false), Outcome::PlayerWins);

        // Opponent breakthrough on row 2
        let board = Board::from_string("......OPP").unwrap();
        assert_eq!(classify(&board, true), Outcome::OpponentWins);
        assert_eq!(classify(&board, false), Outcome::OpponentWins);

        // No opponent pawns left
        let board = Board::from_string("....P....").unwrap();
        assert_eq!(classify(&board, true), Outcome::PlayerWins);

        // No player pawns left
        let board = Board::from_string("....O....").unwrap();
        assert_eq!(classify(&board, false), Outcome::OpponentWins);
    }

    #[test]
    fn test_classify_stalemate() {
        // Single opponent pawn blocked head-on by a player pawn: whoever must
        // move loses.
        let board = Board::from_string(".O..P...P").unwrap();
        assert!(legal_opponent_moves(&board).is_empty());
        assert_eq!(classify(&board, true), Outcome::PlayerWins);
        assert_eq!(classify(&board, false), Outcome::Ongoing);
    }

    #[test]
    fn test_classify_idempotent_on_terminal_boards() {
        let board = Board::from_string("......OPP").unwrap();
        let first = classify(&board, true);
        assert!(first.is_terminal());
        assert_eq!(classify(&board, true), first);
        assert_eq!(classify(&board, true), first);
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::PlayerWins.winner(), Some(Side::Player));
        assert_eq!(Outcome::OpponentWins.winner(), Some(Side::Opponent));
        assert_eq!(Outcome::Ongoing.winner(), None);
        assert!(!Outcome::Ongoing.is_terminal());
    }
}
