//! Online order intake
//!
//! Customer self-orders queue here until staff act on them. Accepting one
//! promotes it into the kitchen ledger under the synthetic table id
//! `"Online-{id}"`; the online record and the kitchen ticket are
//! independent from then on (the synthetic id is the only link).

use super::PosStore;
use shared::{LineItem, OnlineOrder, OnlineOrderStatus, Order, OrderId, SliceKey};

impl PosStore {
    /// Queue a customer-submitted order (`Pending`)
    pub fn submit_online_order(&self, items: Vec<LineItem>, customer_name: &str) -> OnlineOrder {
        self.with_state(|state| {
            let order = OnlineOrder {
                id: self.next_id(),
                items,
                placed_by: customer_name.to_string(),
                time: Self::time_of_day(),
                status: OnlineOrderStatus::Pending,
            };
            state.online_orders.push(order.clone());
            self.persist(state, &[SliceKey::OnlineOrders]);
            order
        })
    }

    /// Overwrite an online order's status; no flow constraint applies at
    /// this layer. Unknown ids are a logged no-op.
    pub fn update_online_status(&self, id: OrderId, status: OnlineOrderStatus) {
        self.with_state(|state| {
            match state.online_orders.iter_mut().find(|o| o.id == id) {
                Some(order) => {
                    order.status = status;
                    self.persist(state, &[SliceKey::OnlineOrders]);
                }
                None => {
                    tracing::debug!(order_id = %id, "Ignoring status update for unknown online order");
                }
            }
        });
    }

    /// Accept an online order: mark it `Accepted` and promote it into the
    /// kitchen ledger. Returns the new kitchen order, or `None` for an
    /// unknown id.
    pub fn accept_online_order(&self, id: OrderId) -> Option<Order> {
        let promoted = self.with_state(|state| {
            let online = state.online_orders.iter_mut().find(|o| o.id == id)?;
            online.status = OnlineOrderStatus::Accepted;
            let items = online.items.clone();
            let placed_by = online.placed_by.clone();
            self.persist(state, &[SliceKey::OnlineOrders]);

            let table_id = format!("Online-{id}");
            Some(self.place_order_in(state, &table_id, items, &placed_by))
        });
        if let Some(order) = &promoted {
            self.forward_order(order);
        } else {
            tracing::debug!(order_id = %id, "Ignoring accept for unknown online order");
        }
        promoted
    }
}
