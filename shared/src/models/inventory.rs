//! Inventory audit log and derived stock classification

use serde::{Deserialize, Serialize};

/// One restock action, appended to the audit trail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestockEntry {
    pub item: String,
    pub qty: f64,
    pub time: String,
}

/// Derived display classification of a stock quantity (not persisted)
///
/// Negative stock is legal; it signals over-ordering against the recipe
/// map and is surfaced as its own level rather than folded into `Low`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StockLevel {
    Backordered,
    Low,
    Medium,
    Ok,
}

impl StockLevel {
    pub fn classify(qty: f64) -> Self {
        if qty < 0.0 {
            StockLevel::Backordered
        } else if qty <= 2.0 {
            StockLevel::Low
        } else if qty <= 5.0 {
            StockLevel::Medium
        } else {
            StockLevel::Ok
        }
    }
}
