use axum::extract::Extension;
use axum::routing::{get, post};
use axum::Router;
use ipfs_intake::config::Config;
use ipfs_intake::ingest::coordinator::IngestCoordinator;
use ipfs_intake::ingest::handlers::{handle_submit_bulk, handle_submit_csv, handle_submit_token};
use ipfs_intake::queue::backend::WorkQueue;
use ipfs_intake::queue::memory::MemoryQueue;
use ipfs_intake::store::backend::MetadataStore;
use ipfs_intake::store::catalog::RecordCatalog;
use ipfs_intake::store::handlers::{handle_get_token, handle_list_tokens};
use ipfs_intake::store::memory::MemoryStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // 1. Configuration (fail fast on a missing table name):
    let config = Config::from_env()?;
    tracing::info!("using intake table {}", config.table);

    // 2. Storage and queue layer:
    let store: Arc<dyn MetadataStore> = Arc::new(MemoryStore::new(&config.table));
    let queue: Arc<dyn WorkQueue> = Arc::new(MemoryQueue::new(&config.table));

    let catalog = Arc::new(RecordCatalog::new(store));
    let coordinator = Arc::new(IngestCoordinator::new(queue));

    // 3. HTTP Router:
    let app = Router::new()
        .route("/ping", get(handle_ping))
        .route("/tokens", get(handle_list_tokens))
        .route("/tokens/:cid", get(handle_get_token).post(handle_submit_token))
        .route("/bulk", post(handle_submit_bulk))
        .route("/csv", post(handle_submit_csv))
        .layer(Extension(catalog))
        .layer(Extension(coordinator));

    // 4. Start HTTP server:
    tracing::info!("intake API listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn handle_ping() -> &'static str {
    "pong"
}
