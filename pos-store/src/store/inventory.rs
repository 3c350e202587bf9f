//! Inventory ledger operations
//!
//! Stock is a flat ingredient -> quantity map. Order placement deducts
//! through the static recipe map; items without a recipe entry leave
//! stock untouched. There is no floor at zero: negative stock is the
//! visible signal of over-ordering (surfaced as
//! [`StockLevel::Backordered`]).

use super::{PosStore, StoreSnapshot};
use shared::{LineItem, RestockEntry, SliceKey, StockLevel};
use std::collections::BTreeMap;

impl PosStore {
    /// Deduct ingredients consumed by the given line items
    pub fn deduct(&self, items: &[LineItem]) {
        self.with_state(|state| {
            if self.deduct_in(state, items) {
                self.persist(state, &[SliceKey::Stock]);
            }
        });
    }

    /// Add quantity to an ingredient and append to the restock audit log
    ///
    /// Non-finite or non-positive quantities are ignored entirely; the
    /// call never partially applies. Restocking an unknown ingredient
    /// creates it, matching staff expectations when re-adding a
    /// previously removed item.
    pub fn restock(&self, item: &str, qty: f64) {
        if !qty.is_finite() || qty <= 0.0 {
            tracing::warn!(item, qty, "Ignoring restock with non-positive quantity");
            return;
        }
        self.with_state(|state| {
            *state.stock.entry(item.to_string()).or_insert(0.0) += qty;
            state.restock_history.push(RestockEntry {
                item: item.to_string(),
                qty,
                time: Self::timestamp(),
            });
            self.persist(state, &[SliceKey::Stock, SliceKey::RestockHistory]);
        });
    }

    /// Add a new ingredient at zero stock; blank or duplicate names are
    /// no-ops
    pub fn add_stock_item(&self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.with_state(|state| {
            if state.stock.contains_key(name) {
                tracing::debug!(item = name, "Ingredient already tracked, skipping add");
                return;
            }
            state.stock.insert(name.to_string(), 0.0);
            self.persist(state, &[SliceKey::Stock]);
        });
    }

    /// Remove an ingredient from the catalog
    ///
    /// Restock history for the item is kept as a historical record.
    pub fn remove_stock_item(&self, name: &str) {
        self.with_state(|state| {
            if state.stock.remove(name).is_some() {
                self.persist(state, &[SliceKey::Stock]);
            } else {
                tracing::debug!(item = name, "Ignoring removal of unknown ingredient");
            }
        });
    }

    /// Current stock with its derived display classification
    pub fn stock_levels(&self) -> BTreeMap<String, (f64, StockLevel)> {
        self.with_state(|state| {
            state
                .stock
                .iter()
                .map(|(name, qty)| (name.clone(), (*qty, StockLevel::classify(*qty))))
                .collect()
        })
    }

    /// Apply recipe deductions to the given state; returns whether any
    /// stock changed. Ingredients named by a recipe but missing from
    /// stock are created at zero and go negative.
    pub(crate) fn deduct_in(&self, state: &mut StoreSnapshot, items: &[LineItem]) -> bool {
        let mut changed = false;
        for item in items {
            let Some(recipe) = self.config().recipes.get(&item.name) else {
                continue;
            };
            for (ingredient, per_unit) in recipe {
                let entry = state.stock.entry(ingredient.clone()).or_insert(0.0);
                *entry -= per_unit * f64::from(item.quantity);
                changed = true;
            }
        }
        changed
    }
}
