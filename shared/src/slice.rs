//! Persisted state slices
//!
//! Each slice is serialized as JSON under its own storage key and
//! reconciled across tabs wholesale: when another tab writes a slice, the
//! local copy of that slice is replaced, never merged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one independently persisted piece of store state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SliceKey {
    KotList,
    OrderHistory,
    TableStatuses,
    OnlineOrders,
    Stock,
    RestockHistory,
    CompletedBills,
    BillPendingTables,
}

impl SliceKey {
    pub const ALL: [SliceKey; 8] = [
        SliceKey::KotList,
        SliceKey::OrderHistory,
        SliceKey::TableStatuses,
        SliceKey::OnlineOrders,
        SliceKey::Stock,
        SliceKey::RestockHistory,
        SliceKey::CompletedBills,
        SliceKey::BillPendingTables,
    ];

    /// The storage key this slice is persisted under
    pub fn as_str(self) -> &'static str {
        match self {
            SliceKey::KotList => "kotList",
            SliceKey::OrderHistory => "orderHistory",
            SliceKey::TableStatuses => "tableStatuses",
            SliceKey::OnlineOrders => "onlineOrders",
            SliceKey::Stock => "stock",
            SliceKey::RestockHistory => "restockHistory",
            SliceKey::CompletedBills => "completedBills",
            SliceKey::BillPendingTables => "billPendingTables",
        }
    }

    /// Reverse lookup from a storage key, e.g. from a change event
    pub fn from_key_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == name)
    }
}

impl fmt::Display for SliceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_name_round_trip() {
        for key in SliceKey::ALL {
            assert_eq!(SliceKey::from_key_name(key.as_str()), Some(key));
        }
        assert_eq!(SliceKey::from_key_name("user"), None);
    }
}
