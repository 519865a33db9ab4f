//! Completed-game records and the recorder that produces them.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Local, Utc};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::game::Player;

/// One stone placement within a game.
///
/// The sequence index of a move is its position in the record's move list;
/// records store moves in placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new, Getters)]
pub struct Move {
    /// Row of the placed stone.
    row: usize,
    /// Column of the placed stone.
    col: usize,
    /// Player who placed the stone.
    player: Player,
}

/// Terminal outcome of a finished game.
///
/// Persisted as the strings `"Black"`, `"White"` or `"Draw"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum GameResult {
    /// The given player completed five in a row.
    Won(Player),
    /// The board filled with no winning line.
    Draw,
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Won(player) => f.write_str(player.label()),
            GameResult::Draw => f.write_str("Draw"),
        }
    }
}

impl From<GameResult> for String {
    fn from(result: GameResult) -> Self {
        result.to_string()
    }
}

impl TryFrom<String> for GameResult {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "Black" => Ok(GameResult::Won(Player::Black)),
            "White" => Ok(GameResult::Won(Player::White)),
            "Draw" => Ok(GameResult::Draw),
            other => Err(format!("invalid game result: '{}'", other)),
        }
    }
}

/// Immutable summary of one finished game.
///
/// Created exactly once by [`GameRecorder::finalize`] and never modified
/// afterwards. Serializes to the persisted history format:
/// `{"size", "gameNumber", "date", "result", "moves"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GameRecord {
    /// Board side length the game was played on.
    size: usize,
    /// Unique identifier, a millisecond timestamp.
    #[serde(rename = "gameNumber")]
    game_number: i64,
    /// Human-readable completion time.
    date: String,
    /// Terminal outcome.
    result: GameResult,
    /// Moves in placement order.
    moves: Vec<Move>,
}

impl GameRecord {
    /// Formats the history-listing line for this record.
    ///
    /// `ordinal` is the 1-based position of the record in the listing.
    pub fn summary(&self, ordinal: usize) -> String {
        let outcome = match self.result {
            GameResult::Draw => "Game is a draw".to_string(),
            GameResult::Won(player) => format!("Winner: {}", player),
        };
        format!("GAME #{} @{}, {}", ordinal, self.date, outcome)
    }
}

/// Last issued game number, kept strictly increasing within the process so
/// two games finishing in the same millisecond still get distinct ids.
static LAST_GAME_NUMBER: AtomicI64 = AtomicI64::new(0);

/// Issues a fresh unique game number from the current time.
fn next_game_number() -> i64 {
    let now = Utc::now().timestamp_millis();
    let previous = LAST_GAME_NUMBER
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(if now > last { now } else { last + 1 })
        })
        .unwrap_or_else(|last| last);
    if now > previous {
        now
    } else {
        previous + 1
    }
}

/// Accumulates the moves of one game in progress.
///
/// Dropping a recorder before [`GameRecorder::finalize`] discards the
/// accumulated moves: an abandoned session leaves no trace in the store.
#[derive(Debug)]
pub struct GameRecorder {
    /// Board side length of the session.
    size: usize,
    /// Moves recorded so far, in placement order.
    moves: Vec<Move>,
}

impl GameRecorder {
    /// Creates an empty recorder for a board of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            moves: Vec::new(),
        }
    }

    /// Appends one move, called exactly once per accepted board move and in
    /// the same order.
    #[instrument(skip(self))]
    pub fn record_move(&mut self, row: usize, col: usize, player: Player) {
        debug!(row, col, player = %player, index = self.moves.len(), "Move recorded");
        self.moves.push(Move::new(row, col, player));
    }

    /// Returns the moves recorded so far.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns how many moves have been recorded.
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Freezes the accumulated moves into an immutable [`GameRecord`].
    ///
    /// Called exactly once, when win or draw detection reports a terminal
    /// outcome; assigns a fresh unique game number and the current time.
    #[instrument(skip(self), fields(moves = self.moves.len()))]
    pub fn finalize(self, result: GameResult) -> GameRecord {
        let game_number = next_game_number();
        let date = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        info!(game_number, result = %result, moves = self.moves.len(), "Game finalized");
        GameRecord {
            size: self.size,
            game_number,
            date,
            result,
            moves: self.moves,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_numbers_are_unique_and_increasing() {
        let a = next_game_number();
        let b = next_game_number();
        let c = next_game_number();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_finalize_preserves_move_order() {
        let mut recorder = GameRecorder::new(5);
        recorder.record_move(0, 0, Player::Black);
        recorder.record_move(1, 0, Player::White);
        recorder.record_move(0, 1, Player::Black);
        let record = recorder.finalize(GameResult::Won(Player::Black));
        assert_eq!(*record.size(), 5);
        assert_eq!(record.moves().len(), 3);
        assert_eq!(record.moves()[1], Move::new(1, 0, Player::White));
        assert_eq!(*record.result(), GameResult::Won(Player::Black));
    }

    #[test]
    fn test_record_serializes_to_history_format() {
        let record = GameRecord {
            size: 5,
            game_number: 1700000000000,
            date: "2023-11-14 22:13:20".to_string(),
            result: GameResult::Won(Player::Black),
            moves: vec![
                Move::new(0, 0, Player::Black),
                Move::new(1, 0, Player::White),
            ],
        };
        let json = serde_json::to_string(&record).expect("serializable");
        assert_eq!(
            json,
            concat!(
                "{\"size\":5,\"gameNumber\":1700000000000,",
                "\"date\":\"2023-11-14 22:13:20\",\"result\":\"Black\",",
                "\"moves\":[{\"row\":0,\"col\":0,\"player\":1},",
                "{\"row\":1,\"col\":0,\"player\":2}]}"
            )
        );
        let parsed: GameRecord = serde_json::from_str(&json).expect("parsable");
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_draw_result_round_trips() {
        let json = "\"Draw\"";
        let result: GameResult = serde_json::from_str(json).expect("parsable");
        assert_eq!(result, GameResult::Draw);
        assert_eq!(serde_json::to_string(&result).expect("serializable"), json);
    }

    #[test]
    fn test_summary_lines() {
        let won = GameRecord {
            size: 5,
            game_number: 1,
            date: "2023-11-14 22:13:20".to_string(),
            result: GameResult::Won(Player::White),
            moves: Vec::new(),
        };
        assert_eq!(won.summary(1), "GAME #1 @2023-11-14 22:13:20, Winner: White");
        let draw = GameRecord {
            result: GameResult::Draw,
            ..won.clone()
        };
        assert_eq!(
            draw.summary(2),
            "GAME #2 @2023-11-14 22:13:20, Game is a draw"
        );
    }
}
