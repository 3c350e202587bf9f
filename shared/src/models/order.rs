//! Kitchen order ticket (KOT) model and status flow

use serde::{Deserialize, Serialize};
use std::fmt;

/// Time-based order identifier (unix milliseconds, strictly monotonic
/// within a process). Treated as opaque by consumers.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(transparent)]
pub struct OrderId(pub i64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kitchen ticket status
///
/// The normal flow only ever moves forward through [`OrderStatus::FLOW`].
/// `Paid` sits outside the flow and is reached exclusively through billing
/// archival.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Accepted,
    Preparing,
    #[serde(rename = "Ready to Serve")]
    ReadyToServe,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    Completed,
    Paid,
}

impl OrderStatus {
    /// The ordered kitchen status flow (excludes the terminal `Paid`)
    pub const FLOW: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::Preparing,
        OrderStatus::ReadyToServe,
        OrderStatus::OutForDelivery,
        OrderStatus::Completed,
    ];

    fn flow_index(self) -> Option<usize> {
        Self::FLOW.iter().position(|s| *s == self)
    }

    /// Statuses this order may be moved to: the suffix of the flow starting
    /// at the current status (staying put is allowed). `Paid` offers no
    /// transitions.
    pub fn next_allowed(self) -> &'static [OrderStatus] {
        match self.flow_index() {
            Some(i) => &Self::FLOW[i..],
            None => &[],
        }
    }

    /// Whether a transition from `self` to `next` is offered by the flow
    pub fn can_become(self, next: OrderStatus) -> bool {
        self.next_allowed().contains(&next)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Accepted => "Accepted",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::ReadyToServe => "Ready to Serve",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Completed => "Completed",
            OrderStatus::Paid => "Paid",
        };
        f.write_str(name)
    }
}

/// One ordered line of a ticket
///
/// Price is copied from the menu at order time so later menu edits never
/// retroactively alter historical orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }
}

/// Kitchen order ticket
///
/// `table` holds the display id (`"{room} - {table}"`) or a synthetic id
/// such as `"Online-{id}"` for promoted online orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub table: String,
    pub items: Vec<LineItem>,
    pub placed_by: String,
    pub time: String,
    pub status: OrderStatus,
}
