//! Order ledger operations
//!
//! Placing an order is the one composite mutation in the system: it
//! touches stock, the table registry, the live ledger, and the history
//! mirror within a single locked section. Everything else here touches
//! the ledger and/or its history mirror only.
//!
//! The history log is append-only and mirrors every live entry by id;
//! status changes apply to both in lockstep until billing removes the
//! live entry (the history entry then stays `Paid` forever).

use super::{PosStore, StoreSnapshot};
use shared::{LineItem, Order, OrderId, OrderStatus, SliceKey, TableKey, TableStatus};

impl PosStore {
    /// Place a new kitchen order against a table display id
    ///
    /// Constructs a `Pending` order, deducts ingredient stock per the
    /// recipe map, marks the referenced table `Occupied`, and appends the
    /// order to both the live ledger and the history mirror. A display id
    /// that does not parse (synthetic `"Online-{id}"` ids, takeaway
    /// labels) skips the table side effect only; the order is still
    /// created.
    pub fn place_order(&self, table_display_id: &str, items: Vec<LineItem>, placed_by: &str) -> Order {
        let order = self.with_state(|state| self.place_order_in(state, table_display_id, items, placed_by));
        self.forward_order(&order);
        order
    }

    /// The composite place-order mutation, run under an already-held lock
    /// (also the promotion path for accepted online orders)
    pub(crate) fn place_order_in(
        &self,
        state: &mut StoreSnapshot,
        table_display_id: &str,
        items: Vec<LineItem>,
        placed_by: &str,
    ) -> Order {
        let order = self.build_order(table_display_id, items, placed_by);
        let mut dirty = Vec::new();

        if self.deduct_in(state, &order.items) {
            dirty.push(SliceKey::Stock);
        }

        let slot = TableKey::parse(table_display_id).and_then(|key| {
            state
                .table_statuses
                .get_mut(&key.room)
                .and_then(|room| room.get_mut(&key.table))
        });
        match slot {
            Some(slot) => {
                *slot = TableStatus::Occupied;
                dirty.push(SliceKey::TableStatuses);
            }
            None => tracing::debug!(
                table = %table_display_id,
                "Table id not in registry, skipping occupancy update"
            ),
        }

        if insert_guarded(state, order.clone()) {
            dirty.push(SliceKey::KotList);
            dirty.push(SliceKey::OrderHistory);
        }
        self.persist(state, &dirty);
        order
    }

    /// Insert a pre-built order into the ledger and history mirror
    ///
    /// Used by the sync listener to mirror orders placed elsewhere. No
    /// stock or table side effects; the duplicate-id guard makes
    /// re-application of the same order a no-op. Returns whether the
    /// order was inserted.
    pub fn record_order(&self, order: Order) -> bool {
        self.with_state(|state| {
            let inserted = insert_guarded(state, order);
            if inserted {
                self.persist(state, &[SliceKey::KotList, SliceKey::OrderHistory]);
            }
            inserted
        })
    }

    /// Move an order forward through the kitchen flow
    ///
    /// The live ledger entry and the history entry change together, by id.
    /// Unknown ids and backward (or `Paid`-escaping) transitions are
    /// logged no-ops; two staff members racing on the same ticket is a
    /// benign race, not an error.
    pub fn update_order_status(&self, id: OrderId, new_status: OrderStatus) {
        self.with_state(|state| {
            let current = state
                .kot_list
                .iter()
                .find(|o| o.id == id)
                .or_else(|| state.order_history.iter().find(|o| o.id == id))
                .map(|o| o.status);

            let Some(current) = current else {
                tracing::debug!(order_id = %id, "Ignoring status update for unknown order");
                return;
            };
            if !current.can_become(new_status) {
                tracing::warn!(
                    order_id = %id,
                    from = %current,
                    to = %new_status,
                    "Rejected backward status transition"
                );
                return;
            }

            for order in state.kot_list.iter_mut().filter(|o| o.id == id) {
                order.status = new_status;
            }
            for order in state.order_history.iter_mut().filter(|o| o.id == id) {
                order.status = new_status;
            }
            self.persist(state, &[SliceKey::KotList, SliceKey::OrderHistory]);
        });
    }

    /// The statuses an order may move to from `current` (forward only,
    /// staying put included; `Paid` offers none)
    pub fn next_allowed_statuses(&self, current: OrderStatus) -> &'static [OrderStatus] {
        current.next_allowed()
    }

    /// Mark the matching history entry `Paid`; the live ledger is the
    /// caller's responsibility (see [`PosStore::replace_ledger`])
    pub fn archive_order(&self, order: &Order) {
        self.archive_orders(std::slice::from_ref(order));
    }

    /// Mark every matching history entry `Paid`
    pub fn archive_orders(&self, orders: &[Order]) {
        self.with_state(|state| {
            archive_in(state, orders);
            self.persist(state, &[SliceKey::OrderHistory]);
        });
    }

    /// Bulk overwrite of the live ledger (used when dropping paid orders)
    pub fn replace_ledger(&self, new_list: Vec<Order>) {
        self.with_state(|state| {
            state.kot_list = new_list;
            self.persist(state, &[SliceKey::KotList]);
        });
    }

    /// Construct a fresh `Pending` order, sanitizing line items: zero
    /// quantities are dropped, non-finite or negative prices clamp to 0.
    pub(crate) fn build_order(
        &self,
        table_display_id: &str,
        items: Vec<LineItem>,
        placed_by: &str,
    ) -> Order {
        let items = items
            .into_iter()
            .filter(|item| item.quantity > 0)
            .map(|mut item| {
                if !item.price.is_finite() || item.price < 0.0 {
                    tracing::warn!(item = %item.name, price = item.price, "Clamping invalid price to 0");
                    item.price = 0.0;
                }
                item
            })
            .collect();
        Order {
            id: self.next_id(),
            table: table_display_id.to_string(),
            items,
            placed_by: placed_by.to_string(),
            time: Self::time_of_day(),
            status: OrderStatus::Pending,
        }
    }
}

/// Append to the ledger and history mirror unless the id already exists
/// in history (the durable record of every order ever created)
fn insert_guarded(state: &mut StoreSnapshot, order: Order) -> bool {
    if state.order_history.iter().any(|o| o.id == order.id) {
        tracing::debug!(order_id = %order.id, "Duplicate order id, skipping append");
        return false;
    }
    if !state.kot_list.iter().any(|o| o.id == order.id) {
        state.kot_list.push(order.clone());
    }
    state.order_history.push(order);
    true
}

/// Mark history entries matching the given orders `Paid`
pub(crate) fn archive_in(state: &mut StoreSnapshot, orders: &[Order]) {
    for entry in state.order_history.iter_mut() {
        if orders.iter().any(|o| o.id == entry.id) {
            entry.status = OrderStatus::Paid;
        }
    }
}
