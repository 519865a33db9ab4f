//! Five-in-a-row (gomoku) game engine with persistent history and replay.
//!
//! Two players alternately place stones on a square board; the engine
//! decides win/draw after every placement, records finished games into an
//! append-only store and can reconstruct any stored game move-by-move.
//!
//! # Architecture
//!
//! - **Game**: board/turn state machine plus pure win and draw rules
//! - **Session**: drives one game from first stone to leave, recording moves
//! - **Store**: append-only JSON history over an injected key-value storage
//! - **Replay**: rebuilds board contents from a stored record
//!
//! Rendering, navigation and authentication stay outside the crate; the
//! engine only hands out snapshots and outcomes for them to consume.
//!
//! # Example
//!
//! ```
//! use gomoku::{GameSession, GameStatus, GameStore, LeaveOutcome, MemoryStorage};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = GameStore::new(MemoryStorage::new());
//! let mut session = GameSession::new(5)?;
//!
//! // Black builds a full row while White follows along the next one.
//! for col in 0..4 {
//!     session.play(0, col)?; // Black
//!     session.play(1, col)?; // White
//! }
//! let view = session.play(0, 4)?;
//! assert!(view.status().is_terminal());
//!
//! let outcome = session.leave(&store)?;
//! assert!(matches!(outcome, LeaveOutcome::Saved { .. }));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod game;
mod record;
mod replay;
mod session;
mod storage;
mod store;

// Crate-level exports - Configuration
pub use config::{load_board_size, save_board_size, ConfigError, BOARD_SIZE_KEY};

// Crate-level exports - Game types and rules
pub use game::{
    check_win, is_full, Board, GameError, GameStatus, Player, Stone, MAX_BOARD_SIZE,
    MIN_BOARD_SIZE, WIN_LENGTH,
};

// Crate-level exports - Records
pub use record::{GameRecord, GameRecorder, GameResult, Move};

// Crate-level exports - Replay
pub use replay::{reconstruct, ReplayBoard, ReplayError};

// Crate-level exports - Session
pub use session::{BoardView, GameSession, LeaveOutcome};

// Crate-level exports - Storage capability
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};

// Crate-level exports - Game store
pub use store::{GameStore, StoreError, GAMES_KEY};
