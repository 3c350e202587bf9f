//! Order & inventory state store for a single-location restaurant POS
//!
//! The core of this crate is [`PosStore`]: an in-memory snapshot of the
//! restaurant's shared state (table occupancy, kitchen order tickets,
//! order history, online order intake, ingredient stock, bills), mutated
//! through synchronous read-modify-write operations and persisted slice
//! by slice after every mutation through an injected [`SliceStore`] port.
//!
//! Multi-tab consistency is last-writer-wins per slice: a storage change
//! event names the slice that changed and the local copy is reloaded
//! wholesale via [`PosStore::apply_external_change`]. There is no merge
//! and no conflict detection.

pub mod config;
pub mod forward;
pub mod server;
pub mod storage;
pub mod store;
pub mod sync;

pub use config::{MenuCategory, MenuItem, RoomConfig, StoreConfig};
pub use forward::{HttpOrderForwarder, OrderForwarder};
pub use storage::{MemorySliceStore, RedbSliceStore, SliceStore, StorageError};
pub use store::{PosStore, StoreSnapshot};
pub use sync::{ChangeNotifier, NullNotifier, SliceEvent};
