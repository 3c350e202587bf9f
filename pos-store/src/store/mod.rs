//! PosStore - the order/table/inventory state engine
//!
//! One instance per process (or per browser-tab-equivalent embedder).
//! All mutations are synchronous read-modify-write sequences under a
//! single lock, immediately followed by a JSON write of every dirty slice
//! through the storage port and a change notification per written slice.
//!
//! # Mutation Flow
//!
//! ```text
//! operation(args)
//!     ├─ 1. Acquire write lock
//!     ├─ 2. Mutate the in-memory slices (no-op on unknown ids/keys)
//!     ├─ 3. Serialize and write each dirty slice (failure: log, keep memory)
//!     ├─ 4. Publish a SliceEvent per written slice
//!     └─ 5. Release lock, hand new orders to the forwarder (best effort)
//! ```
//!
//! Failure semantics follow the degrade-and-continue contract: unknown
//! entity references and malformed identifiers never raise, invalid
//! numeric input is coerced or ignored, and a storage write failure leaves
//! the in-memory state authoritative for this tab.

mod billing;
mod inventory;
mod ledger;
mod online;
mod tables;

#[cfg(test)]
mod tests;

use crate::config::StoreConfig;
use crate::forward::OrderForwarder;
use crate::storage::SliceStore;
use crate::sync::{ChangeNotifier, SliceEvent};
use chrono::Local;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared::{
    CompletedBill, OnlineOrder, Order, OrderId, RestockEntry, SliceKey, TableStatus,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// All persisted slices of the store, cloneable for reads and deep-equal
/// comparisons. Field names serialize as the slice storage keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub kot_list: Vec<Order>,
    pub order_history: Vec<Order>,
    pub table_statuses: BTreeMap<String, BTreeMap<String, TableStatus>>,
    pub online_orders: Vec<OnlineOrder>,
    pub stock: BTreeMap<String, f64>,
    pub restock_history: Vec<RestockEntry>,
    pub completed_bills: Vec<CompletedBill>,
    pub bill_pending_tables: Vec<String>,
}

/// Monotonic time-based id source: unix millis, bumped past the previous
/// id when two orders land in the same millisecond.
struct IdGen {
    last: AtomicI64,
}

impl IdGen {
    fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    fn next(&self) -> OrderId {
        let now = chrono::Utc::now().timestamp_millis();
        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
                Some(now.max(prev + 1))
            })
            .unwrap_or(now);
        OrderId(now.max(prev + 1))
    }
}

/// The order & inventory state store
pub struct PosStore {
    cfg: StoreConfig,
    storage: Arc<dyn SliceStore>,
    notifier: Arc<dyn ChangeNotifier>,
    forwarder: RwLock<Option<Arc<dyn OrderForwarder>>>,
    state: RwLock<StoreSnapshot>,
    id_gen: IdGen,
}

impl PosStore {
    /// Build a store from configuration and ports, loading every slice
    /// from durable storage. Missing or unreadable slices fall back to
    /// their seeds (all tables `Available`, configured opening stock,
    /// otherwise empty).
    pub fn open(
        cfg: StoreConfig,
        storage: Arc<dyn SliceStore>,
        notifier: Arc<dyn ChangeNotifier>,
    ) -> Self {
        let mut state = StoreSnapshot {
            table_statuses: cfg.seed_tables(),
            stock: cfg.seed_stock.clone(),
            ..StoreSnapshot::default()
        };
        for key in SliceKey::ALL {
            match storage.read(key) {
                Ok(Some(bytes)) => load_slice(&mut state, &cfg, key, &bytes),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(slice = %key, error = %e, "Slice read failed, using seed state");
                }
            }
        }
        Self {
            cfg,
            storage,
            notifier,
            forwarder: RwLock::new(None),
            state: RwLock::new(state),
            id_gen: IdGen::new(),
        }
    }

    /// Install the best-effort order mirror invoked on every placed order
    pub fn set_forwarder(&self, forwarder: Arc<dyn OrderForwarder>) {
        *self.forwarder.write() = Some(forwarder);
    }

    pub fn config(&self) -> &StoreConfig {
        &self.cfg
    }

    /// Deep copy of every slice
    pub fn snapshot(&self) -> StoreSnapshot {
        self.state.read().clone()
    }

    // ========== Slice Reads ==========

    pub fn kot_list(&self) -> Vec<Order> {
        self.state.read().kot_list.clone()
    }

    pub fn order_history(&self) -> Vec<Order> {
        self.state.read().order_history.clone()
    }

    pub fn online_orders(&self) -> Vec<OnlineOrder> {
        self.state.read().online_orders.clone()
    }

    pub fn stock(&self) -> BTreeMap<String, f64> {
        self.state.read().stock.clone()
    }

    pub fn restock_history(&self) -> Vec<RestockEntry> {
        self.state.read().restock_history.clone()
    }

    pub fn completed_bills(&self) -> Vec<CompletedBill> {
        self.state.read().completed_bills.clone()
    }

    pub fn bill_pending_tables(&self) -> Vec<String> {
        self.state.read().bill_pending_tables.clone()
    }

    pub fn tables(&self) -> BTreeMap<String, BTreeMap<String, TableStatus>> {
        self.state.read().table_statuses.clone()
    }

    // ========== Cross-Tab Reconciliation ==========

    /// React to a storage change made by another tab: reload the named
    /// slice from durable storage, replacing the local copy wholesale.
    /// Un-persisted local changes to that slice are discarded by design.
    pub fn apply_external_change(&self, event: &SliceEvent) {
        self.reload_slice(event.key);
    }

    /// Reload one slice from durable storage
    pub fn reload_slice(&self, key: SliceKey) {
        let bytes = match self.storage.read(key) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(slice = %key, error = %e, "Slice reload failed, keeping local copy");
                return;
            }
        };
        let mut state = self.state.write();
        match bytes {
            Some(bytes) => load_slice(&mut state, &self.cfg, key, &bytes),
            // Slice was never written (or was cleared): back to seed state
            None => seed_slice(&mut state, &self.cfg, key),
        }
    }

    // ========== Internal Plumbing ==========

    pub(crate) fn next_id(&self) -> OrderId {
        self.id_gen.next()
    }

    /// Current wall-clock time of day, as displayed on tickets
    pub(crate) fn time_of_day() -> String {
        Local::now().format("%H:%M:%S").to_string()
    }

    /// Current date and time, as displayed on bills and restock entries
    pub(crate) fn timestamp() -> String {
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// Serialize and write each dirty slice, then announce the change.
    /// Write failures are logged; in-memory state stays authoritative.
    pub(crate) fn persist(&self, state: &StoreSnapshot, keys: &[SliceKey]) {
        for &key in keys {
            let bytes = match slice_json(state, key) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::error!(slice = %key, error = %e, "Slice serialization failed");
                    continue;
                }
            };
            if let Err(e) = self.storage.write(key, &bytes) {
                tracing::error!(slice = %key, error = %e, "Slice write failed, in-memory state kept");
                continue;
            }
            let payload = String::from_utf8(bytes).ok();
            self.notifier.notify(&SliceEvent::new(key, payload));
        }
    }

    /// Hand a freshly placed order to the configured mirror, if any
    pub(crate) fn forward_order(&self, order: &Order) {
        if let Some(forwarder) = self.forwarder.read().as_ref() {
            forwarder.forward(order);
        }
    }

    pub(crate) fn with_state<R>(&self, f: impl FnOnce(&mut StoreSnapshot) -> R) -> R {
        let mut state = self.state.write();
        f(&mut state)
    }
}

/// Serialize one slice of the snapshot
fn slice_json(state: &StoreSnapshot, key: SliceKey) -> serde_json::Result<Vec<u8>> {
    match key {
        SliceKey::KotList => serde_json::to_vec(&state.kot_list),
        SliceKey::OrderHistory => serde_json::to_vec(&state.order_history),
        SliceKey::TableStatuses => serde_json::to_vec(&state.table_statuses),
        SliceKey::OnlineOrders => serde_json::to_vec(&state.online_orders),
        SliceKey::Stock => serde_json::to_vec(&state.stock),
        SliceKey::RestockHistory => serde_json::to_vec(&state.restock_history),
        SliceKey::CompletedBills => serde_json::to_vec(&state.completed_bills),
        SliceKey::BillPendingTables => serde_json::to_vec(&state.bill_pending_tables),
    }
}

/// Replace one slice from its serialized form; unparseable data falls
/// back to the seed for that slice
fn load_slice(state: &mut StoreSnapshot, cfg: &StoreConfig, key: SliceKey, bytes: &[u8]) {
    let result = match key {
        SliceKey::KotList => serde_json::from_slice(bytes).map(|v| state.kot_list = v),
        SliceKey::OrderHistory => serde_json::from_slice(bytes).map(|v| state.order_history = v),
        SliceKey::TableStatuses => {
            serde_json::from_slice(bytes).map(|v| state.table_statuses = v)
        }
        SliceKey::OnlineOrders => serde_json::from_slice(bytes).map(|v| state.online_orders = v),
        SliceKey::Stock => serde_json::from_slice(bytes).map(|v| state.stock = v),
        SliceKey::RestockHistory => {
            serde_json::from_slice(bytes).map(|v| state.restock_history = v)
        }
        SliceKey::CompletedBills => {
            serde_json::from_slice(bytes).map(|v| state.completed_bills = v)
        }
        SliceKey::BillPendingTables => {
            serde_json::from_slice(bytes).map(|v| state.bill_pending_tables = v)
        }
    };
    if let Err(e) = result {
        tracing::warn!(slice = %key, error = %e, "Slice parse failed, using seed state");
        seed_slice(state, cfg, key);
    }
}

/// Reset one slice to its seed
fn seed_slice(state: &mut StoreSnapshot, cfg: &StoreConfig, key: SliceKey) {
    match key {
        SliceKey::KotList => state.kot_list.clear(),
        SliceKey::OrderHistory => state.order_history.clear(),
        SliceKey::TableStatuses => state.table_statuses = cfg.seed_tables(),
        SliceKey::OnlineOrders => state.online_orders.clear(),
        SliceKey::Stock => state.stock = cfg.seed_stock.clone(),
        SliceKey::RestockHistory => state.restock_history.clear(),
        SliceKey::CompletedBills => state.completed_bills.clear(),
        SliceKey::BillPendingTables => state.bill_pending_tables.clear(),
    }
}
