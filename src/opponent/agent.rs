//! The adaptive opponent: uniform choice over surviving moves plus
//! negative-reinforcement pruning.

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use super::{history::MatchHistory, memory::MemoryTable};
use crate::board::{Board, Move, rules};

/// An opponent in the spirit of the MENACE machine.
///
/// The first time it is asked to move from a board it seeds a memory entry
/// with every legal opponent move, then draws uniformly at random among the
/// entry's surviving candidates. There is no lookahead, scoring, or search;
/// whatever quality of play emerges comes solely from which moves survive
/// reinforcement across matches.
///
/// Both the memory table and the randomness source are explicit: memory can
/// be injected (restored from a snapshot) and extracted, and the RNG is
/// seedable so tests can replay exact choice sequences.
#[derive(Debug)]
pub struct AdaptiveOpponent {
    memory: MemoryTable,
    rng: StdRng,
}

impl AdaptiveOpponent {
    /// Create an opponent with empty memory. `None` seeds the RNG from
    /// process entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_memory(MemoryTable::new(), seed)
    }

    /// Create an opponent over an existing memory table, e.g. one restored
    /// from a saved snapshot
    pub fn with_memory(memory: MemoryTable, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        AdaptiveOpponent { memory, rng }
    }

    /// Set or reset the opponent's RNG seed
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
    }

    /// The learned memory
    pub fn memory(&self) -> &MemoryTable {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut MemoryTable {
        &mut self.memory
    }

    /// Extract the learned memory, consuming the opponent
    pub fn into_memory(self) -> MemoryTable {
        self.memory
    }

    /// Choose the opponent's move for `board`.
    ///
    /// A never-before-seen board is seeded with all of its legal opponent
    /// moves; the choice is then uniform over the entry's current candidates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCandidateMoves`](crate::Error::NoCandidateMoves)
    /// when the candidate set is empty. That happens in two cases: the board
    /// has no legal opponent move at all (the caller failed to classify a
    /// terminal position before asking the opponent to act), or every
    /// recorded move has been pruned away by earlier losses, in which case
    /// the position is fully disproven and the opponent resigns it.
    pub fn choose_move(&mut self, board: &Board) -> Result<Move, crate::Error> {
        let candidates = self
            .memory
            .seed_if_absent(*board, || rules::legal_opponent_moves(board));

        candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| crate::Error::NoCandidateMoves {
                board: board.encode(),
            })
    }

    /// Discourage a lost match: walk `history` from the most recent move to
    /// the oldest, removing each recorded move from its board's entry.
    ///
    /// Pruning stops at the first entry left non-empty. An entry pruned to
    /// zero candidates means the opponent effectively resigns that position,
    /// so blame cascades to the predecessor move that made it reachable. If
    /// the cascade exhausts the whole history, every entry along it stays
    /// empty and nothing further happens.
    pub fn reinforce_on_loss(&mut self, history: &MatchHistory) {
        for play in history.newest_first() {
            if self.memory.prune(&play.board, play.chosen) {
                break;
            }
        }
    }

    /// Lock in a move that just won a match: the entry for `board` is
    /// replaced with `winning_move` alone, overriding any prior uncertainty,
    /// so the move is replayed whenever this exact board recurs.
    pub fn reinforce_on_win(&mut self, board: &Board, winning_move: Move) {
        self.memory.set_preferred(*board, winning_move);
    }
}
