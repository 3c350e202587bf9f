//! Shared types for the POS order/inventory store
//!
//! Common data model used across the store engine and its consumers:
//! table keys and statuses, kitchen order tickets, online orders,
//! inventory entries, completed bills, and the persisted slice keys.

pub mod models;
pub mod slice;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    CompletedBill, Discount, DiscountApplied, DiscountKind, LineItem, OnlineOrder,
    OnlineOrderStatus, Order, OrderId, OrderStatus, RestockEntry, StockLevel, TableKey,
    TableStatus,
};
pub use slice::SliceKey;
