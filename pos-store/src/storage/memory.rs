//! In-memory slice storage for unit tests and ephemeral embedders

use super::{SliceStore, StorageResult};
use parking_lot::RwLock;
use shared::SliceKey;
use std::collections::HashMap;
use std::sync::Arc;

/// Map-backed [`SliceStore`]
///
/// Cloneable over a shared map so two store instances can share it the way
/// two browser tabs share localStorage.
#[derive(Clone, Default)]
pub struct MemorySliceStore {
    slices: Arc<RwLock<HashMap<SliceKey, Vec<u8>>>>,
}

impl MemorySliceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SliceStore for MemorySliceStore {
    fn read(&self, key: SliceKey) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.slices.read().get(&key).cloned())
    }

    fn write(&self, key: SliceKey, bytes: &[u8]) -> StorageResult<()> {
        self.slices.write().insert(key, bytes.to_vec());
        Ok(())
    }
}
