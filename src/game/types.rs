//! Core domain types for the five-in-a-row game.

use serde::{Deserialize, Serialize};

/// Smallest supported board side length.
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest supported board side length.
pub const MAX_BOARD_SIZE: usize = 20;

/// Player in the game.
///
/// Persisted game records encode players numerically (Black = 1, White = 2),
/// so serde goes through the `u8` conversions below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Player {
    /// Black stones (moves first).
    Black,
    /// White stones (moves second).
    White,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Returns the display label for this player.
    pub fn label(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => 1,
            Player::White => 2,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::Black),
            2 => Ok(Player::White),
            other => Err(format!("invalid player id: {}", other)),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player's stone.
    Occupied(Player),
}

impl Stone {
    /// Checks whether the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Player),
    /// Game ended with a full board and no winner.
    Draw,
}

impl GameStatus {
    /// Checks whether the game has reached a terminal state.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
    }

    #[test]
    fn test_player_numeric_encoding() {
        assert_eq!(u8::from(Player::Black), 1);
        assert_eq!(u8::from(Player::White), 2);
        assert_eq!(Player::try_from(1), Ok(Player::Black));
        assert_eq!(Player::try_from(2), Ok(Player::White));
        assert!(Player::try_from(0).is_err());
        assert!(Player::try_from(3).is_err());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won(Player::Black).is_terminal());
        assert!(GameStatus::Draw.is_terminal());
    }
}
