//! Cross-tab change notification port
//!
//! After a slice is persisted, the store publishes a [`SliceEvent`] on the
//! injected notifier. The embedder is responsible for transporting events
//! between processes/tabs; on receipt, the peer store reloads the named
//! slice from durable storage via [`crate::PosStore::apply_external_change`].
//!
//! Reconciliation is last-writer-wins per whole slice. Two tabs racing to
//! mutate the same slice will clobber one another; that is an accepted
//! limitation of the single-register deployment this targets.

use serde::{Deserialize, Serialize};
use shared::SliceKey;

/// A storage change announcement, as carried between tabs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SliceEvent {
    pub key: SliceKey,
    /// The serialized slice as written, for transports that carry payloads.
    /// Receivers reload from durable storage regardless.
    pub new_value: Option<String>,
}

impl SliceEvent {
    pub fn new(key: SliceKey, new_value: Option<String>) -> Self {
        Self { key, new_value }
    }
}

/// Outbound notification port
pub trait ChangeNotifier: Send + Sync {
    fn notify(&self, event: &SliceEvent);
}

/// Notifier for single-tab deployments: drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl ChangeNotifier for NullNotifier {
    fn notify(&self, _event: &SliceEvent) {}
}
