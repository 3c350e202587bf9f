//! redb-backed slice storage
//!
//! One table maps slice key -> JSON bytes. redb commits with immediate
//! durability by default: a commit that returns is persistent, and the
//! copy-on-write file is always in a consistent state after power loss.
//! That matters here because the store treats every mutation as durable
//! the moment the write returns.

use super::{SliceStore, StorageResult};
use redb::{Database, ReadableDatabase, TableDefinition};
use shared::SliceKey;
use std::path::Path;
use std::sync::Arc;

/// Slices table: key = slice storage key, value = JSON-serialized slice
const SLICES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("slices");

/// Slice storage backed by a redb database file
///
/// Cloneable over a shared handle; several [`crate::PosStore`] instances
/// sharing one `RedbSliceStore` model several tabs sharing one durable
/// store.
#[derive(Clone)]
pub struct RedbSliceStore {
    db: Arc<Database>,
}

impl RedbSliceStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (tests, ephemeral setups)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Create the table up front so reads never hit TableDoesNotExist
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SLICES_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }
}

impl SliceStore for RedbSliceStore {
    fn read(&self, key: SliceKey) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SLICES_TABLE)?;
        Ok(table.get(key.as_str())?.map(|guard| guard.value().to_vec()))
    }

    fn write(&self, key: SliceKey, bytes: &[u8]) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SLICES_TABLE)?;
            table.insert(key.as_str(), bytes)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let store = RedbSliceStore::open_in_memory().unwrap();
        assert!(store.read(SliceKey::Stock).unwrap().is_none());

        store.write(SliceKey::Stock, b"{\"chicken\":50.0}").unwrap();
        let bytes = store.read(SliceKey::Stock).unwrap().unwrap();
        assert_eq!(bytes, b"{\"chicken\":50.0}");
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let store = RedbSliceStore::open_in_memory().unwrap();
        store.write(SliceKey::KotList, b"[]").unwrap();
        store.write(SliceKey::KotList, b"[1]").unwrap();
        assert_eq!(store.read(SliceKey::KotList).unwrap().unwrap(), b"[1]");
    }
}
