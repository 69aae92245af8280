//! Learned move memory keyed by board value

use std::collections::{BTreeMap, HashMap};

use crate::board::{Board, Move};

/// Serialized memory form: flattened 9-square board encoding mapped to
/// `((from_row, from_col), (to_row, to_col))` pairs in entry order. A
/// `BTreeMap` keeps the output stable across runs.
pub type MemorySnapshot = BTreeMap<String, Vec<((usize, usize), (usize, usize))>>;

/// Associative memory mapping each board the opponent has seen to the moves
/// it is still willing to consider from that exact position.
///
/// Entries are created lazily, seeded with every legal opponent move the
/// first time a board is encountered, and shrink monotonically as losing
/// moves are pruned. The one exception is [`set_preferred`], which replaces
/// an entry outright when a move is proven to win immediately.
///
/// Every move stored under a board key was legal from that board at the time
/// of insertion; move order within an entry is the deterministic generation
/// order, so uniform sampling over an entry is reproducible under a seeded
/// RNG.
///
/// [`set_preferred`]: MemoryTable::set_preferred
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    entries: HashMap<Board, Vec<Move>>,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of boards with a recorded entry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if `board` has been seen (even if its entry has been emptied)
    pub fn contains(&self, board: &Board) -> bool {
        self.entries.contains_key(board)
    }

    /// The moves still permitted from `board`, if it has been seen
    pub fn candidates(&self, board: &Board) -> Option<&[Move]> {
        self.entries.get(board).map(Vec::as_slice)
    }

    /// Get the entry for `board`, inserting one produced by `seed` if the
    /// board has never been seen. An existing entry is returned unchanged,
    /// even when it has been pruned empty.
    pub fn seed_if_absent<F>(&mut self, board: Board, seed: F) -> &[Move]
    where
        F: FnOnce() -> Vec<Move>,
    {
        self.entries.entry(board).or_insert_with(seed).as_slice()
    }

    /// Remove `mv` from the entry for `board`, permanently.
    ///
    /// Returns `true` if the entry still has at least one candidate left
    /// afterwards. A missing entry counts as already empty, so blame
    /// cascades past it.
    pub fn prune(&mut self, board: &Board, mv: Move) -> bool {
        match self.entries.get_mut(board) {
            Some(entry) => {
                entry.retain(|&m| m != mv);
                !entry.is_empty()
            }
            None => false,
        }
    }

    /// Replace the entry for `board` with the single move `mv`, discarding
    /// anything previously recorded. Used when `mv` won a match outright
    /// from `board`.
    pub fn set_preferred(&mut self, board: Board, mv: Move) {
        self.entries.insert(board, vec![mv]);
    }

    /// Produce the stable serialized form of this table
    pub fn to_snapshot(&self) -> MemorySnapshot {
        self.entries
            .iter()
            .map(|(board, moves)| {
                let pairs = moves
                    .iter()
                    .map(|mv| ((mv.from.row, mv.from.col), (mv.to.row, mv.to.col)))
                    .collect();
                (board.encode(), pairs)
            })
            .collect()
    }

    /// Rebuild a table from its serialized form.
    ///
    /// # Errors
    ///
    /// Returns error if a board key does not parse or a stored coordinate
    /// falls off the grid.
    pub fn from_snapshot(snapshot: &MemorySnapshot) -> Result<Self, crate::Error> {
        let mut entries = HashMap::with_capacity(snapshot.len());
        for (key, pairs) in snapshot {
            let board = Board::from_string(key)?;
            let mut moves = Vec::with_capacity(pairs.len());
            for &(from, to) in pairs {
                let mv = Move::new(from, to);
                if !mv.from.in_bounds() || !mv.to.in_bounds() {
                    return Err(crate::Error::InvalidMove {
                        row: mv.from.row,
                        col: mv.from.col,
                    });
                }
                moves.push(mv);
            }
            entries.insert(board, moves);
        }
        Ok(MemoryTable { entries })
    }

    /// Serialize the table to a JSON string
    pub fn to_json(&self) -> Result<String, crate::Error> {
        Ok(serde_json::to_string(&self.to_snapshot())?)
    }

    /// Restore a table from [`to_json`](MemoryTable::to_json) output
    pub fn from_json(json: &str) -> Result<Self, crate::Error> {
        let snapshot: MemorySnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(&snapshot)
    }
}
