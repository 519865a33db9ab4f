//! Key-value storage capability for persisted game data.
//!
//! The store and the board-size configuration are written as opaque strings
//! under named keys. Implementations only need last-write-wins semantics
//! with a single writer at a time.

mod file;
mod memory;

use derive_more::{Display, Error};

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage backend error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("storage error: {} at {}:{}", message, file, line)]
pub struct StorageError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl StorageError {
    /// Creates a new storage error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StorageError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Get/set of an opaque string under a named key.
///
/// Injected into [`crate::GameStore`] and the board-size configuration so
/// the core makes no assumption about where the data lives.
pub trait KeyValueStorage: Send + Sync {
    /// Reads the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
