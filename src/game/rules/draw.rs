//! Draw detection for five-in-a-row.

use tracing::instrument;

use super::super::board::Board;

/// Checks if the board is full (every cell occupied).
///
/// A full board is only a draw when the filling move did not win, so the
/// caller must run win detection first; a move that both fills the board
/// and completes a line is a win, never a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|s| !s.is_empty())
}
