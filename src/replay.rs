//! Replay reconstruction from stored game records.

use derive_more::{Display, Error};
use tracing::{debug, instrument};

use crate::game::{Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::record::GameRecord;

/// Error surfaced by replay reconstruction.
///
/// Stored records are external input, so a blob that parses but carries
/// impossible coordinates is rejected here rather than trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// Requested move index does not exist in the record.
    #[display("replay index {index} is out of range for {moves} recorded moves")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of moves in the record.
        moves: usize,
    },
    /// Record's board size is outside the supported range.
    #[display("recorded board size {size} is outside the supported range {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}")]
    InvalidRecordSize {
        /// The rejected size.
        size: usize,
    },
    /// A recorded move lies outside the record's own board.
    #[display("recorded move ({row}, {col}) is outside a {size}x{size} board")]
    MoveOutOfBounds {
        /// Recorded row.
        row: usize,
        /// Recorded column.
        col: usize,
        /// Board side length from the record.
        size: usize,
    },
}

/// Grid contents reconstructed from a record, with per-cell move labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayBoard {
    size: usize,
    cells: Vec<Stone>,
    /// 1-based move index per cell, `None` for empty cells.
    labels: Vec<Option<usize>>,
}

impl ReplayBoard {
    /// Returns the side length of the reconstructed board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the stone at the given coordinates, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Stone> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    /// Gets the 1-based move index that placed the stone at the given
    /// coordinates, or `None` for empty or out-of-bounds cells.
    pub fn label(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.labels[row * self.size + col]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Stone] {
        &self.cells
    }

    /// Counts the stones on the reconstructed board.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| !s.is_empty()).count()
    }
}

/// Replays a record's moves onto a fresh grid of the record's size.
///
/// With `upto = Some(i)` only `moves[0..=i]` are replayed; `None` replays
/// the whole game. The outcome is already known from the record, so win and
/// draw detection are not re-run.
///
/// # Errors
///
/// Returns [`ReplayError::IndexOutOfRange`] if `upto` names a move the
/// record does not contain, and [`ReplayError::InvalidRecordSize`] or
/// [`ReplayError::MoveOutOfBounds`] if the record's own data violates the
/// board invariants.
#[instrument(skip(record), fields(game_number = record.game_number(), moves = record.moves().len()))]
pub fn reconstruct(record: &GameRecord, upto: Option<usize>) -> Result<ReplayBoard, ReplayError> {
    let size = *record.size();
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(ReplayError::InvalidRecordSize { size });
    }

    let moves = record.moves();
    for mv in moves {
        if *mv.row() >= size || *mv.col() >= size {
            return Err(ReplayError::MoveOutOfBounds {
                row: *mv.row(),
                col: *mv.col(),
                size,
            });
        }
    }

    let count = match upto {
        Some(index) if index >= moves.len() => {
            return Err(ReplayError::IndexOutOfRange {
                index,
                moves: moves.len(),
            });
        }
        Some(index) => index + 1,
        None => moves.len(),
    };

    let mut board = ReplayBoard {
        size,
        cells: vec![Stone::Empty; size * size],
        labels: vec![None; size * size],
    };

    for (index, mv) in moves[..count].iter().enumerate() {
        let cell = mv.row() * size + mv.col();
        board.cells[cell] = Stone::Occupied(*mv.player());
        board.labels[cell] = Some(index + 1);
    }

    debug!(replayed = count, "Board reconstructed");
    Ok(board)
}
