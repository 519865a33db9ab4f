//! Win detection for five-in-a-row.

use tracing::instrument;

use super::super::board::Board;
use super::super::types::{Player, Stone};

/// Number of collinear stones needed to win.
///
/// Deliberately independent of the board size: on a size-5 board a win
/// requires a full row, column or main diagonal, while larger boards can
/// win anywhere a run of five occurs.
pub const WIN_LENGTH: usize = 5;

/// The four axes a line can run along: horizontal, vertical and the two
/// diagonals. Each axis is walked in both directions from the placed stone.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Checks whether the stone just placed at `(row, col)` completes a run of
/// [`WIN_LENGTH`] or more.
///
/// Returns `Some(player)` for the winning player, `None` if no axis through
/// the placed stone reaches the threshold. Only the most recent move can
/// newly complete a line, so this is the only cell that needs checking.
#[instrument(skip(board))]
pub fn check_win(board: &Board, row: usize, col: usize) -> Option<Player> {
    let player = match board.get(row, col)? {
        Stone::Occupied(player) => player,
        Stone::Empty => return None,
    };

    for (dr, dc) in AXES {
        let run = 1
            + walk(board, player, row, col, dr, dc)
            + walk(board, player, row, col, -dr, -dc);
        if run >= WIN_LENGTH {
            return Some(player);
        }
    }

    None
}

/// Counts consecutive stones of `player` starting one step away from
/// `(row, col)` in the direction `(dr, dc)`.
fn walk(board: &Board, player: Player, row: usize, col: usize, dr: isize, dc: isize) -> usize {
    let size = board.size() as isize;
    let mut count = 0;
    let mut r = row as isize + dr;
    let mut c = col as isize + dc;

    while r >= 0 && r < size && c >= 0 && c < size {
        if board.get(r as usize, c as usize) != Some(Stone::Occupied(player)) {
            break;
        }
        count += 1;
        r += dr;
        c += dc;
    }

    count
}
