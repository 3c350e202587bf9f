//! Fire-and-forget order forwarding
//!
//! A newly placed order can be mirrored to an external local-network
//! listener (see the `kot-syncd` binary). Forwarding is best effort:
//! the outcome is logged and never affects local state.

use shared::Order;
use std::time::Duration;

/// Outbound order mirror port
pub trait OrderForwarder: Send + Sync {
    fn forward(&self, order: &Order);
}

/// Forwarder that POSTs the order JSON to a fixed endpoint
///
/// The request runs on a detached thread so order placement never blocks
/// on the network.
pub struct HttpOrderForwarder {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpOrderForwarder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_default();
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

impl OrderForwarder for HttpOrderForwarder {
    fn forward(&self, order: &Order) {
        let endpoint = self.endpoint.clone();
        let client = self.client.clone();
        let order = order.clone();
        std::thread::spawn(move || {
            match client.post(&endpoint).json(&order).send() {
                Ok(resp) if resp.status().is_success() => {
                    tracing::info!(order_id = %order.id, endpoint = %endpoint, "Order forwarded");
                }
                Ok(resp) => {
                    tracing::warn!(
                        order_id = %order.id,
                        status = %resp.status(),
                        "Order forward rejected by listener"
                    );
                }
                Err(e) => {
                    tracing::warn!(order_id = %order.id, error = %e, "Order forward failed");
                }
            }
        });
    }
}
