//! Board state: grid contents, turn ownership and terminal status.

use tracing::{debug, instrument};

use super::error::GameError;
use super::types::{GameStatus, Player, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Square game board with turn tracking.
///
/// The side length is fixed at creation. Every cell transitions from
/// [`Stone::Empty`] to [`Stone::Occupied`] at most once; once the status is
/// terminal the board rejects further moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Side length of the square grid.
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Stone>,
    /// Player whose turn it is.
    current_player: Player,
    /// Game status.
    status: GameStatus,
}

impl Board {
    /// Creates an empty board with Black to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardSize`] if `size` is outside
    /// [`MIN_BOARD_SIZE`]`..=`[`MAX_BOARD_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize { size });
        }
        debug!(size, "Creating board");
        Ok(Self {
            size,
            cells: vec![Stone::Empty; size * size],
            current_player: Player::Black,
            status: GameStatus::InProgress,
        })
    }

    /// Returns the side length of the board.
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

    /// Checks if the cell at the given coordinates is empty.
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Stone::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Stone] {
        &self.cells
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Checks whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Places the current player's stone at the given coordinates.
    ///
    /// The turn is NOT flipped here: the caller evaluates win and draw
    /// against this exact position first and calls [`Board::flip_turn`]
    /// only when the move did not end the game. Returns the player who
    /// just moved.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameAlreadyOver`], [`GameError::OutOfBounds`]
    /// or [`GameError::CellOccupied`]; every failure leaves the board
    /// unchanged.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Player, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }
        if row >= self.size || col >= self.size {
            return Err(GameError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        if !self.is_empty_at(row, col) {
            return Err(GameError::CellOccupied { row, col });
        }

        let player = self.current_player;
        self.cells[row * self.size + col] = Stone::Occupied(player);
        debug!(row, col, player = %player, "Stone placed");
        Ok(player)
    }

    /// Hands the turn to the other player.
    ///
    /// Separate from [`Board::apply_move`] so the caller can run win and
    /// draw detection against the mover's position first.
    pub fn flip_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Marks the game as ended with the given terminal status.
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Clears the board back to a fresh game of the same size.
    pub(crate) fn reset(&mut self) {
        self.cells.fill(Stone::Empty);
        self.current_player = Player::Black;
        self.status = GameStatus::InProgress;
    }
}
