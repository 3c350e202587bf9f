//! Slice persistence port
//!
//! The store serializes each [`SliceKey`] as one JSON blob and writes it
//! synchronously after every mutation. Backends only need whole-blob
//! read/write; there is no partial update and no cross-slice transaction
//! beyond what a single mutation touches.

mod memory;
mod redb_store;

pub use memory::MemorySliceStore;
pub use redb_store::RedbSliceStore;

use shared::SliceKey;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Durable storage for persisted slices
///
/// Write failures are surfaced so the store can log them; the in-memory
/// state stays authoritative for the current process either way.
pub trait SliceStore: Send + Sync {
    /// Read the serialized slice, `None` when it was never written
    fn read(&self, key: SliceKey) -> StorageResult<Option<Vec<u8>>>;

    /// Overwrite the serialized slice
    fn write(&self, key: SliceKey, bytes: &[u8]) -> StorageResult<()>;
}
