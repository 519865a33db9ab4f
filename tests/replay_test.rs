//! Tests for replay reconstruction against records produced by real
//! sessions.

use gomoku::{
    reconstruct, GameSession, GameStore, LeaveOutcome, MemoryStorage, Player, ReplayError, Stone,
};

/// Plays the reference Black win, saves it and returns the stored record.
fn saved_win_record() -> gomoku::GameRecord {
    let store = GameStore::new(MemoryStorage::new());
    let mut session = GameSession::new(5).expect("valid size");
    for (row, col) in [
        (0, 0),
        (1, 0),
        (0, 1),
        (1, 1),
        (0, 2),
        (1, 2),
        (0, 3),
        (1, 3),
        (0, 4),
    ] {
        session.play(row, col).expect("valid move");
    }
    let LeaveOutcome::Saved { game_number } = session.leave(&store).expect("leave failed") else {
        panic!("finished game must be saved");
    };
    store.find_by_id(game_number).expect("record missing")
}

#[test]
fn test_full_replay_matches_live_board() {
    let store = GameStore::new(MemoryStorage::new());
    let mut session = GameSession::new(5).expect("valid size");
    for (row, col) in [
        (0, 0),
        (1, 0),
        (0, 1),
        (1, 1),
        (0, 2),
        (1, 2),
        (0, 3),
        (1, 3),
        (0, 4),
    ] {
        session.play(row, col).expect("valid move");
    }
    let final_cells = session.board().cells().to_vec();

    let LeaveOutcome::Saved { game_number } = session.leave(&store).expect("leave failed") else {
        panic!("finished game must be saved");
    };
    let record = store.find_by_id(game_number).expect("record missing");

    let board = reconstruct(&record, None).expect("reconstruct failed");
    assert_eq!(board.cells(), final_cells.as_slice());
}

#[test]
fn test_partial_replay_shows_first_five_moves() {
    let record = saved_win_record();
    let board = reconstruct(&record, Some(4)).expect("reconstruct failed");

    assert_eq!(board.stone_count(), 5);
    // moves[0..=4]: B(0,0) W(1,0) B(0,1) W(1,1) B(0,2), labeled 1..=5.
    assert_eq!(board.get(0, 0), Some(Stone::Occupied(Player::Black)));
    assert_eq!(board.label(0, 0), Some(1));
    assert_eq!(board.get(1, 0), Some(Stone::Occupied(Player::White)));
    assert_eq!(board.label(1, 0), Some(2));
    assert_eq!(board.label(0, 1), Some(3));
    assert_eq!(board.label(1, 1), Some(4));
    assert_eq!(board.label(0, 2), Some(5));
    // Later moves are absent from the partial view.
    assert_eq!(board.get(0, 3), Some(Stone::Empty));
    assert_eq!(board.label(0, 3), None);
}

#[test]
fn test_replay_index_past_last_move_is_rejected() {
    let record = saved_win_record();
    assert_eq!(
        reconstruct(&record, Some(9)),
        Err(ReplayError::IndexOutOfRange { index: 9, moves: 9 })
    );
    assert!(reconstruct(&record, Some(8)).is_ok());
}

#[test]
fn test_tampered_record_is_rejected_not_replayed() {
    // A stored blob that parses fine but carries coordinates no 5x5 game
    // could have produced.
    let json = concat!(
        "{\"size\":5,\"gameNumber\":1700000000000,",
        "\"date\":\"2023-11-14 22:13:20\",\"result\":\"Black\",",
        "\"moves\":[{\"row\":99,\"col\":0,\"player\":1}]}"
    );
    let record: gomoku::GameRecord = serde_json::from_str(json).expect("parsable");
    assert_eq!(
        reconstruct(&record, None),
        Err(ReplayError::MoveOutOfBounds {
            row: 99,
            col: 0,
            size: 5,
        })
    );

    let oversized = json.replace("\"size\":5", "\"size\":50");
    let record: gomoku::GameRecord = serde_json::from_str(&oversized).expect("parsable");
    assert_eq!(
        reconstruct(&record, None),
        Err(ReplayError::InvalidRecordSize { size: 50 })
    );
}

#[test]
fn test_replay_of_parsed_record_round_trips() {
    let record = saved_win_record();
    let json = serde_json::to_string(&record).expect("serializable");
    let parsed: gomoku::GameRecord = serde_json::from_str(&json).expect("parsable");

    let original = reconstruct(&record, None).expect("reconstruct failed");
    let replayed = reconstruct(&parsed, None).expect("reconstruct failed");
    assert_eq!(original, replayed);
}
