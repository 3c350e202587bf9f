//! Customer-submitted online order model

use super::order::{LineItem, OrderId};
use serde::{Deserialize, Serialize};

/// Online order status
///
/// Independent of the kitchen flow; no forward-only rule is enforced at
/// this layer. Accepting an online order additionally promotes it into the
/// kitchen ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OnlineOrderStatus {
    #[default]
    Pending,
    Accepted,
    #[serde(rename = "Ready to Serve")]
    ReadyToServe,
    Delivered,
}

/// Customer self-order submitted through the QR flow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OnlineOrder {
    pub id: OrderId,
    pub items: Vec<LineItem>,
    pub placed_by: String,
    pub time: String,
    pub status: OnlineOrderStatus,
}
