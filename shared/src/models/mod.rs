//! Data model for the order/table/inventory state engine

pub mod bill;
pub mod inventory;
pub mod online_order;
pub mod order;
pub mod table;

pub use bill::{CompletedBill, Discount, DiscountApplied, DiscountKind};
pub use inventory::{RestockEntry, StockLevel};
pub use online_order::{OnlineOrder, OnlineOrderStatus};
pub use order::{LineItem, Order, OrderId, OrderStatus};
pub use table::{TableKey, TableStatus};
