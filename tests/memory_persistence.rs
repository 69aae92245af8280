use hexapawn::{
    AdaptiveOpponent, Board, MatchHistory, MemoryTable, Move, apply_move, legal_opponent_moves,
};

fn trained_opponent() -> AdaptiveOpponent {
    let mut opponent = AdaptiveOpponent::new(Some(77));

    let opening = Board::initial();
    opponent.choose_move(&opening).unwrap();

    let after_advance = apply_move(&opening, Move::new((2, 1), (1, 1))).unwrap();
    opponent.choose_move(&after_advance).unwrap();

    // Prune one line and pin another so the snapshot carries both shapes
    let mut history = MatchHistory::new();
    history.record(opening, Move::new((0, 0), (1, 0)));
    opponent.reinforce_on_loss(&history);
    opponent.reinforce_on_win(&after_advance, Move::new((0, 0), (1, 1)));

    opponent
}

#[test]
fn json_roundtrip_preserves_every_entry() {
    let opponent = trained_opponent();
    let json = opponent.memory().to_json().unwrap();
    let restored = MemoryTable::from_json(&json).unwrap();

    assert_eq!(restored.to_snapshot(), opponent.memory().to_snapshot());
}

#[test]
fn snapshot_keys_are_flattened_board_encodings() {
    let opponent = trained_opponent();
    let snapshot = opponent.memory().to_snapshot();

    assert!(snapshot.contains_key("OOO...PPP"));
    for key in snapshot.keys() {
        let board = Board::from_string(key).expect("snapshot key must parse as a board");
        assert_eq!(&board.encode(), key);
    }
}

#[test]
fn restored_memory_drives_identical_play_under_the_same_seed() {
    let opponent = trained_opponent();
    let json = opponent.memory().to_json().unwrap();

    let mut original = AdaptiveOpponent::with_memory(opponent.into_memory(), Some(404));
    let mut restored =
        AdaptiveOpponent::with_memory(MemoryTable::from_json(&json).unwrap(), Some(404));

    let board = Board::initial();
    for _ in 0..20 {
        assert_eq!(
            original.choose_move(&board).unwrap(),
            restored.choose_move(&board).unwrap()
        );
    }
}

#[test]
fn pruning_survives_the_roundtrip() {
    let opponent = trained_opponent();
    let opening = Board::initial();
    let pruned = Move::new((0, 0), (1, 0));

    let restored = MemoryTable::from_json(&opponent.memory().to_json().unwrap()).unwrap();
    let candidates = restored.candidates(&opening).unwrap();
    assert!(!candidates.contains(&pruned));
    assert_eq!(
        candidates.len(),
        legal_opponent_moves(&opening).len() - 1
    );
}
