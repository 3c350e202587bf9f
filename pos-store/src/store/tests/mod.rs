use super::*;
use crate::config::StoreConfig;
use crate::storage::MemorySliceStore;
use crate::sync::{NullNotifier, SliceEvent};
use shared::{LineItem, Order, OrderStatus, TableKey};

mod test_flows;
mod test_sync;

fn create_test_store() -> PosStore {
    PosStore::open(
        StoreConfig::default(),
        Arc::new(MemorySliceStore::new()),
        Arc::new(NullNotifier),
    )
}

fn create_store_on(storage: MemorySliceStore) -> PosStore {
    PosStore::open(
        StoreConfig::default(),
        Arc::new(storage),
        Arc::new(NullNotifier),
    )
}

fn chicken65(quantity: u32) -> LineItem {
    LineItem::new("Chicken 65", quantity, 8.99)
}

/// Plain line item with no recipe entry
fn naan(quantity: u32) -> LineItem {
    LineItem::new("Plain Naan", quantity, 1.49)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Notifier double that records every published event
#[derive(Default)]
struct RecordingNotifier {
    events: parking_lot::Mutex<Vec<SliceEvent>>,
}

impl crate::sync::ChangeNotifier for RecordingNotifier {
    fn notify(&self, event: &SliceEvent) {
        self.events.lock().push(event.clone());
    }
}

/// Forwarder double that records every forwarded order
#[derive(Default)]
struct RecordingForwarder {
    orders: parking_lot::Mutex<Vec<Order>>,
}

impl crate::forward::OrderForwarder for RecordingForwarder {
    fn forward(&self, order: &Order) {
        self.orders.lock().push(order.clone());
    }
}
