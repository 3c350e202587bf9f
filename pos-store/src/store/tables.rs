//! Table registry operations
//!
//! The room/table set is fixed at store creation; runtime mutation is
//! limited to the occupancy status. Any status may overwrite any other
//! status: the registry does not police transitions, staff actions do.

use super::PosStore;
use shared::{SliceKey, TableKey, TableStatus};

impl PosStore {
    /// Unconditional status overwrite
    ///
    /// Unknown room/table keys are a logged no-op: the registry never
    /// grows at runtime, and callers assume the pre-seeded set.
    pub fn set_table_status(&self, key: &TableKey, status: TableStatus) {
        let changed = self.with_state(|state| {
            match state
                .table_statuses
                .get_mut(&key.room)
                .and_then(|room| room.get_mut(&key.table))
            {
                Some(slot) => {
                    *slot = status;
                    self.persist(state, &[SliceKey::TableStatuses]);
                    true
                }
                None => false,
            }
        });
        if !changed {
            tracing::debug!(table = %key, "Ignoring status update for unknown table");
        }
    }

    /// Current occupancy status, `None` for unknown keys
    pub fn table_status(&self, key: &TableKey) -> Option<TableStatus> {
        self.with_state(|state| {
            state
                .table_statuses
                .get(&key.room)
                .and_then(|room| room.get(&key.table))
                .copied()
        })
    }
}
