//! Settlement: closing out a table into a completed bill
//!
//! Settlement is the only path that removes orders from the live ledger
//! and the only path to the `Paid` status. Monetary arithmetic runs on
//! `Decimal` and is rounded to two places before being frozen into the
//! bill; the bill is never recomputed afterwards.

use super::{PosStore, ledger::archive_in};
use rust_decimal::prelude::*;
use shared::{
    CompletedBill, Discount, DiscountApplied, DiscountKind, SliceKey, TableKey, TableStatus,
};

/// Monetary values carry 2 decimal places, rounded half away from zero
const DECIMAL_PLACES: u32 = 2;

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Compute the frozen discount for a subtotal
///
/// Invalid numeric input (non-finite or non-positive values) degrades to
/// no discount. The discount amount never exceeds the subtotal, so the
/// total never goes negative.
fn apply_discount(sub_total: Decimal, discount: Discount) -> DiscountApplied {
    let (kind, value) = match discount {
        Discount::Percent(v) if v.is_finite() && v > 0.0 => (DiscountKind::Percent, v),
        Discount::Amount(v) if v.is_finite() && v > 0.0 => (DiscountKind::Amount, v),
        Discount::Percent(v) | Discount::Amount(v) => {
            tracing::warn!(value = v, "Ignoring discount with invalid value");
            (DiscountKind::None, 0.0)
        }
        Discount::None => (DiscountKind::None, 0.0),
    };
    let amount = match kind {
        DiscountKind::Percent => {
            (sub_total * to_decimal(value) / Decimal::ONE_HUNDRED).min(sub_total)
        }
        DiscountKind::Amount => to_decimal(value).min(sub_total),
        DiscountKind::None => Decimal::ZERO,
    };
    DiscountApplied {
        kind,
        value,
        amount: round2(amount).to_f64().unwrap_or(0.0),
    }
}

impl PosStore {
    /// Flag a table as waiting for its bill (dedup append)
    pub fn mark_bill_pending(&self, table_display_id: &str) {
        self.with_state(|state| {
            if state
                .bill_pending_tables
                .iter()
                .any(|t| t == table_display_id)
            {
                return;
            }
            state.bill_pending_tables.push(table_display_id.to_string());
            self.persist(state, &[SliceKey::BillPendingTables]);
        });
    }

    /// Settle every live order for a table into one completed bill
    ///
    /// Collects the table's live orders (none: returns `None` untouched),
    /// totals their items, freezes the discount, marks the history
    /// entries `Paid`, drops the orders from the live ledger, frees the
    /// table, clears its bill-pending flag, and appends the bill to the
    /// archive.
    pub fn settle_table(
        &self,
        table_display_id: &str,
        payment_mode: &str,
        discount: Discount,
    ) -> Option<CompletedBill> {
        let bill = self.with_state(|state| {
            let settled: Vec<_> = state
                .kot_list
                .iter()
                .filter(|o| o.table == table_display_id)
                .cloned()
                .collect();
            if settled.is_empty() {
                tracing::debug!(table = %table_display_id, "No live orders to settle");
                return None;
            }

            let items: Vec<_> = settled.iter().flat_map(|o| o.items.clone()).collect();
            let sub_total = round2(
                items
                    .iter()
                    .map(|i| to_decimal(i.price) * Decimal::from(i.quantity))
                    .sum(),
            );
            let discount = apply_discount(sub_total, discount);
            let total = round2(sub_total - to_decimal(discount.amount));

            let mut dirty = vec![
                SliceKey::OrderHistory,
                SliceKey::KotList,
                SliceKey::CompletedBills,
            ];

            archive_in(state, &settled);
            state.kot_list.retain(|o| o.table != table_display_id);

            let freed = TableKey::parse(table_display_id).and_then(|key| {
                state
                    .table_statuses
                    .get_mut(&key.room)
                    .and_then(|room| room.get_mut(&key.table))
            });
            match freed {
                Some(slot) => {
                    *slot = TableStatus::Available;
                    dirty.push(SliceKey::TableStatuses);
                }
                None => tracing::debug!(
                    table = %table_display_id,
                    "Table id not in registry, skipping release"
                ),
            }

            let pending_before = state.bill_pending_tables.len();
            state.bill_pending_tables.retain(|t| t != table_display_id);
            if state.bill_pending_tables.len() != pending_before {
                dirty.push(SliceKey::BillPendingTables);
            }

            let bill = CompletedBill {
                table: table_display_id.to_string(),
                items,
                sub_total: sub_total.to_f64().unwrap_or(0.0),
                discount,
                total: total.to_f64().unwrap_or(0.0),
                time: Self::timestamp(),
                payment: payment_mode.to_string(),
            };
            state.completed_bills.push(bill.clone());

            self.persist(state, &dirty);
            Some(bill)
        });
        if let Some(bill) = &bill {
            tracing::info!(
                table = %bill.table,
                total = bill.total,
                payment = %bill.payment,
                "Table settled"
            );
        }
        bill
    }
}
