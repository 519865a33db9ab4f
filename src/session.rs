//! Game session: drives the board, detectors and recorder for one game.
//!
//! The session owns the board and the in-progress move sequence. Leaving a
//! session that reached a terminal outcome finalizes and persists a record;
//! leaving earlier discards everything, which is deliberate policy rather
//! than an error.

use derive_getters::Getters;
use tracing::{info, instrument};

use crate::game::{check_win, is_full, Board, GameError, GameStatus, Player, Stone};
use crate::record::{GameRecorder, GameResult};
use crate::storage::KeyValueStorage;
use crate::store::{GameStore, StoreError};

/// Snapshot handed to the rendering layer after every accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct BoardView {
    /// Board side length.
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Stone>,
    /// Player whose turn it is (the winner's color if the game just ended).
    active_player: Player,
    /// Terminal-outcome indicator.
    status: GameStatus,
}

/// How a session ended, used by the navigation layer to pick a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// The game finished and its record was appended to the store.
    Saved {
        /// Identifier of the persisted record.
        game_number: i64,
    },
    /// The session was abandoned before a terminal outcome; nothing was
    /// persisted.
    Abandoned,
}

/// One interactive game from first stone to leave.
///
/// Moves are processed one at a time, synchronously; the session is owned
/// by a single participant and never sees two moves in flight.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    recorder: GameRecorder,
}

impl GameSession {
    /// Starts a session on a fresh board of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardSize`] for an unsupported size.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        let board = Board::new(size)?;
        info!(size, "Game session started");
        Ok(Self {
            board,
            recorder: GameRecorder::new(size),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the terminal result, if the game has ended.
    pub fn result(&self) -> Option<GameResult> {
        match self.board.status() {
            GameStatus::Won(player) => Some(GameResult::Won(player)),
            GameStatus::Draw => Some(GameResult::Draw),
            GameStatus::InProgress => None,
        }
    }

    /// Plays one move for the current player.
    ///
    /// On success the move is recorded, win detection runs against the
    /// placed stone, then draw detection, and the turn flips only when the
    /// game continues. Returns the snapshot for the rendering layer.
    ///
    /// # Errors
    ///
    /// Returns the [`GameError`] move rejection; the session is unchanged.
    #[instrument(skip(self))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<BoardView, GameError> {
        let player = self.board.apply_move(row, col)?;
        self.recorder.record_move(row, col, player);

        if let Some(winner) = check_win(&self.board, row, col) {
            self.board.set_status(GameStatus::Won(winner));
            info!(winner = %winner, moves = self.recorder.move_count(), "Game won");
        } else if is_full(&self.board) {
            self.board.set_status(GameStatus::Draw);
            info!(moves = self.recorder.move_count(), "Game drawn");
        } else {
            self.board.flip_turn();
        }

        Ok(self.view())
    }

    /// Builds the current snapshot for the rendering layer.
    pub fn view(&self) -> BoardView {
        BoardView {
            size: self.board.size(),
            cells: self.board.cells().to_vec(),
            active_player: self.board.current_player(),
            status: self.board.status(),
        }
    }

    /// Restarts the session on a fresh board of the same size, discarding
    /// the accumulated moves without persisting anything.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(discarded = self.recorder.move_count(), "Game reset");
        self.board.reset();
        self.recorder = GameRecorder::new(self.board.size());
    }

    /// Ends the session.
    ///
    /// A finished game is finalized into a [`crate::GameRecord`] and
    /// appended to the store; an unfinished one is discarded and nothing is
    /// persisted. The returned [`LeaveOutcome`] is the navigation layer's
    /// decision point.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the finished record cannot be appended.
    #[instrument(skip(self, store))]
    pub fn leave<S: KeyValueStorage>(
        self,
        store: &GameStore<S>,
    ) -> Result<LeaveOutcome, StoreError> {
        match self.result() {
            Some(result) => {
                let record = self.recorder.finalize(result);
                let game_number = *record.game_number();
                store.append(record)?;
                Ok(LeaveOutcome::Saved { game_number })
            }
            None => {
                info!(
                    discarded = self.recorder.move_count(),
                    "Session abandoned before a terminal outcome; nothing persisted"
                );
                Ok(LeaveOutcome::Abandoned)
            }
        }
    }
}
