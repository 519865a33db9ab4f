//! Board-size configuration persisted in the storage capability.
//!
//! The size chosen before a session starts lives under its own key as
//! decimal text. An absent or invalid value falls back to the smallest
//! supported size instead of failing.

use derive_more::{Display, Error, From};
use tracing::{debug, instrument, warn};

use crate::game::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::storage::{KeyValueStorage, StorageError};

/// Storage key holding the configured board size.
pub const BOARD_SIZE_KEY: &str = "boardSize";

/// Error surfaced by configuration operations.
#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    /// Requested board size is outside the supported range.
    #[display("board size {size} is outside the supported range 5..=20")]
    InvalidBoardSize {
        /// The rejected size.
        size: usize,
    },
    /// The storage backend failed.
    #[display("storage failure: {source}")]
    #[from]
    Storage {
        /// Underlying backend error.
        source: StorageError,
    },
}

/// Loads the configured board size, defaulting to [`MIN_BOARD_SIZE`] when
/// the key is absent or holds an unusable value.
///
/// # Errors
///
/// Returns [`ConfigError::Storage`] if the backend fails.
#[instrument(skip(storage))]
pub fn load_board_size<S: KeyValueStorage>(storage: &S) -> Result<usize, ConfigError> {
    let Some(raw) = storage.get(BOARD_SIZE_KEY)? else {
        debug!(default = MIN_BOARD_SIZE, "No stored board size");
        return Ok(MIN_BOARD_SIZE);
    };
    match raw.trim().parse::<usize>() {
        Ok(size) if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) => Ok(size),
        _ => {
            warn!(value = %raw, default = MIN_BOARD_SIZE, "Ignoring invalid stored board size");
            Ok(MIN_BOARD_SIZE)
        }
    }
}

/// Persists the board size for the next session.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBoardSize`] outside the supported range,
/// or [`ConfigError::Storage`] if the backend fails.
#[instrument(skip(storage))]
pub fn save_board_size<S: KeyValueStorage>(storage: &S, size: usize) -> Result<(), ConfigError> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(ConfigError::InvalidBoardSize { size });
    }
    storage.set(BOARD_SIZE_KEY, &size.to_string())?;
    debug!(size, "Board size saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_default_when_absent() {
        let storage = MemoryStorage::new();
        assert_eq!(load_board_size(&storage).expect("load failed"), 5);
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        save_board_size(&storage, 15).expect("save failed");
        assert_eq!(load_board_size(&storage).expect("load failed"), 15);
    }

    #[test]
    fn test_invalid_stored_value_falls_back() {
        let storage = MemoryStorage::new();
        for bad in ["abc", "", "4", "21", "-3"] {
            storage.set(BOARD_SIZE_KEY, bad).expect("set failed");
            assert_eq!(load_board_size(&storage).expect("load failed"), 5);
        }
    }

    #[test]
    fn test_save_rejects_out_of_range() {
        let storage = MemoryStorage::new();
        assert!(matches!(
            save_board_size(&storage, 4),
            Err(ConfigError::InvalidBoardSize { size: 4 })
        ));
        assert!(matches!(
            save_board_size(&storage, 21),
            Err(ConfigError::InvalidBoardSize { size: 21 })
        ));
        // Rejected saves leave the stored value untouched.
        assert_eq!(load_board_size(&storage).expect("load failed"), 5);
    }
}
