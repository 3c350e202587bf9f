//! kot-syncd - local-network KOT sync listener
//!
//! Accepts orders posted by other registers/tabs and mirrors them into a
//! redb-backed store. Configuration comes from the environment:
//! `POS_DB_PATH` (default `./pos-data.redb`) and `POS_LISTEN`
//! (default `0.0.0.0:5000`).

use anyhow::Context;
use pos_store::{NullNotifier, PosStore, RedbSliceStore, StoreConfig, server};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let db_path = std::env::var("POS_DB_PATH").unwrap_or_else(|_| "./pos-data.redb".to_string());
    let listen = std::env::var("POS_LISTEN").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

    let storage = RedbSliceStore::open(&db_path)
        .with_context(|| format!("failed to open slice store at {db_path}"))?;
    let store = Arc::new(PosStore::open(
        StoreConfig::default(),
        Arc::new(storage),
        Arc::new(NullNotifier),
    ));

    let app = server::router(store);
    let listener = tokio::net::TcpListener::bind(&listen)
        .await
        .with_context(|| format!("failed to bind {listen}"))?;
    tracing::info!(listen = %listen, db = %db_path, "kot-syncd listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
