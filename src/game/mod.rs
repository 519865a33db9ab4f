mod board;
mod error;
mod rules;
mod types;

pub use board::Board;
pub use error::GameError;
pub use rules::{check_win, is_full, WIN_LENGTH};
pub use types::{GameStatus, Player, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
