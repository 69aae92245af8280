//! Per-match record of the opponent's moves

use serde::{Deserialize, Serialize};

use crate::board::{Board, Move};

/// One (board, chosen move) pair from an opponent turn.
///
/// The board is a snapshot of the position as it stood before the move was
/// made; board value semantics guarantee later play cannot corrupt it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    pub board: Board,
    pub chosen: Move,
}

/// Chronological record of every move the opponent made during one match.
///
/// Owned by the match controller, handed to the opponent only at
/// reinforcement time, and discarded (or cleared) once the match concludes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchHistory {
    plays: Vec<PlayedMove>,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a move made from `board`
    pub fn record(&mut self, board: Board, chosen: Move) {
        self.plays.push(PlayedMove { board, chosen });
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// All recorded plays, oldest first
    pub fn plays(&self) -> &[PlayedMove] {
        &self.plays
    }

    /// Iterate from the most recent play back to the oldest, the order
    /// reinforcement walks blame through the match
    pub fn newest_first(&self) -> impl Iterator<Item = &PlayedMove> {
        self.plays.iter().rev()
    }

    /// Forget all recorded plays so the history can serve another match
    pub fn clear(&mut self) {
        self.plays.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_order() {
        let mut history = MatchHistory::new();
        assert!(history.is_empty());

        let board = Board::initial();
        let first = Move::new((0, 0), (1, 0));
        let second = Move::new((0, 1), (1, 1));
        history.record(board, first);
        history.record(board, second);

        assert_eq!(history.len(), 2);
        assert_eq!(history.plays()[0].chosen, first);

        let newest: Vec<Move> = history.newest_first().map(|p| p.chosen).collect();
        assert_eq!(newest, vec![second, first]);
    }

    #[test]
    fn test_clear() {
        let mut history = MatchHistory::new();
        history.record(Board::initial(), Move::new((0, 0), (1, 0)));
        history.clear();
        assert!(history.is_empty());
    }
}
