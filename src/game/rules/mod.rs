//! Game rules for five-in-a-row.
//!
//! Pure functions evaluating a board position; rules are separated from
//! board storage so the session can compose them around each move.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_win, WIN_LENGTH};
