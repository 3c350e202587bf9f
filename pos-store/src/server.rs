//! Local-network order sync listener
//!
//! A small HTTP surface that mirrors orders placed on other devices into
//! this process's store: the counterpart of [`crate::HttpOrderForwarder`].
//! Receiving is append-only through the duplicate-id guard, so replayed
//! posts are harmless.

use axum::routing::{get, post};
use axum::{Json, Router, extract::State};
use serde::Serialize;
use shared::Order;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::PosStore;

/// Sync acknowledgement body
#[derive(Debug, Serialize)]
pub struct SyncAck {
    pub success: bool,
    pub message: String,
}

/// Build the listener router around a shared store
pub fn router(store: Arc<PosStore>) -> Router {
    Router::new()
        .route("/api/sync-order", post(sync_order))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        // Listener serves browser tabs across the local network
        .layer(CorsLayer::permissive())
        .with_state(store)
}

/// POST /api/sync-order - mirror an order into the local ledger
async fn sync_order(State(store): State<Arc<PosStore>>, Json(order): Json<Order>) -> Json<SyncAck> {
    let order_id = order.id;
    let inserted = store.record_order(order);
    if inserted {
        tracing::info!(order_id = %order_id, "Order synced to local ledger");
    } else {
        tracing::debug!(order_id = %order_id, "Duplicate sync, order already recorded");
    }
    Json(SyncAck {
        success: true,
        message: if inserted {
            "Order synced to local KOT".to_string()
        } else {
            "Order already recorded".to_string()
        },
    })
}

/// GET /health - liveness probe
async fn health() -> &'static str {
    "ok"
}
