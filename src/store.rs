//! Append-only store of finished game records.

use std::sync::Mutex;

use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument, warn};

use crate::record::GameRecord;
use crate::storage::{KeyValueStorage, StorageError};

/// Storage key holding the persisted history blob.
pub const GAMES_KEY: &str = "games";

/// Error surfaced by game store operations.
#[derive(Debug, Display, Error, From)]
pub enum StoreError {
    /// No record with the requested game number exists.
    #[display("no game record with number {game_number}")]
    RecordNotFound {
        /// The game number that was looked up.
        game_number: i64,
    },
    /// The persisted collection could not be encoded or decoded.
    #[display("stored game collection is corrupt: {message}")]
    CorruptData {
        /// Decoder message.
        message: String,
    },
    /// The storage backend failed.
    #[display("storage failure: {source}")]
    #[from]
    Storage {
        /// Underlying backend error.
        source: StorageError,
    },
}

/// Append-only collection of [`GameRecord`]s kept as one JSON blob in an
/// injected [`KeyValueStorage`].
///
/// Records are never mutated or removed; a corrupt blob is recovered by
/// falling back to an empty collection rather than failing the caller.
#[derive(Debug)]
pub struct GameStore<S: KeyValueStorage> {
    storage: S,
    /// Serializes the read-modify-write of appends so concurrent sessions
    /// sharing one store cannot lose records.
    append_lock: Mutex<()>,
}

impl<S: KeyValueStorage> GameStore<S> {
    /// Creates a store over the given storage backend.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            append_lock: Mutex::new(()),
        }
    }

    /// Appends a finished game record to the persisted collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be written back.
    #[instrument(skip(self, record), fields(game_number = record.game_number()))]
    pub fn append(&self, record: GameRecord) -> Result<(), StoreError> {
        let _guard = self
            .append_lock
            .lock()
            .map_err(|_| StorageError::new("append lock poisoned"))?;

        let mut records = self.load_collection()?;
        records.push(record);
        let blob = serde_json::to_string(&records).map_err(|err| StoreError::CorruptData {
            message: err.to_string(),
        })?;
        self.storage.set(GAMES_KEY, &blob)?;

        info!(count = records.len(), "Game record appended");
        Ok(())
    }

    /// Finds a record by its game number.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RecordNotFound`] for an unknown game number,
    /// or [`StoreError::Storage`] if the backend fails.
    #[instrument(skip(self))]
    pub fn find_by_id(&self, game_number: i64) -> Result<GameRecord, StoreError> {
        self.load_collection()?
            .into_iter()
            .find(|record| *record.game_number() == game_number)
            .ok_or(StoreError::RecordNotFound { game_number })
    }

    /// Lists all records in insertion order, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the backend fails.
    #[instrument(skip(self))]
    pub fn list_all(&self) -> Result<Vec<GameRecord>, StoreError> {
        let records = self.load_collection()?;
        debug!(count = records.len(), "Game records loaded");
        Ok(records)
    }

    /// Loads the persisted collection, treating a missing or unparsable
    /// blob as empty. Corruption implies data loss, so it is logged.
    fn load_collection(&self) -> Result<Vec<GameRecord>, StoreError> {
        let Some(blob) = self.storage.get(GAMES_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&blob) {
            Ok(records) => Ok(records),
            Err(err) => {
                warn!(
                    error = %err,
                    "Stored game collection is corrupt; starting from an empty history"
                );
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;
    use crate::record::{GameRecorder, GameResult};
    use crate::storage::MemoryStorage;

    fn sample_record() -> GameRecord {
        let mut recorder = GameRecorder::new(5);
        recorder.record_move(0, 0, Player::Black);
        recorder.finalize(GameResult::Won(Player::Black))
    }

    #[test]
    fn test_list_all_empty_without_blob() {
        let store = GameStore::new(MemoryStorage::new());
        assert!(store.list_all().expect("list failed").is_empty());
    }

    #[test]
    fn test_append_then_find() {
        let store = GameStore::new(MemoryStorage::new());
        let record = sample_record();
        let game_number = *record.game_number();
        store.append(record.clone()).expect("append failed");

        let found = store.find_by_id(game_number).expect("find failed");
        assert_eq!(found, record);
    }

    #[test]
    fn test_find_unknown_id() {
        let store = GameStore::new(MemoryStorage::new());
        let result = store.find_by_id(42);
        assert!(matches!(
            result,
            Err(StoreError::RecordNotFound { game_number: 42 })
        ));
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let store = GameStore::new(MemoryStorage::new());
        let first = sample_record();
        let second = sample_record();
        store.append(first.clone()).expect("append failed");
        store.append(second.clone()).expect("append failed");

        let all = store.list_all().expect("list failed");
        assert_eq!(all, vec![first, second]);
    }

    #[test]
    fn test_corrupt_blob_recovers_as_empty() {
        let storage = MemoryStorage::new();
        storage.set(GAMES_KEY, "{not json").expect("set failed");
        let store = GameStore::new(storage);

        assert!(store.list_all().expect("list failed").is_empty());

        // Appending after recovery starts a fresh collection.
        store.append(sample_record()).expect("append failed");
        assert_eq!(store.list_all().expect("list failed").len(), 1);
    }
}
