//! Errors produced by board creation and move validation.
//!
//! All of these are expected, local conditions: a failed move leaves the
//! board untouched and is surfaced to the caller as a rejected result.

use derive_more::{Display, Error};

/// Error rejecting a board configuration or a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Requested board side length is outside the supported range.
    #[display("board size {size} is outside the supported range 5..=20")]
    InvalidBoardSize {
        /// The rejected size.
        size: usize,
    },
    /// Move coordinates fall outside the grid.
    #[display("move ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        size: usize,
    },
    /// Target cell already holds a stone.
    #[display("cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// No moves are accepted once the game has ended.
    #[display("the game is already over")]
    GameAlreadyOver,
}
