use std::net::SocketAddr;
use std::sync::Arc;

use apptrack_backend::{
    config::{get_config, init_config, StorageBackend},
    database::pool::create_pool,
    routes,
    storage::{MemoryStore, SharedStore, SqliteStore},
    AppState,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let store: SharedStore = match config.storage_backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage backend");
            Arc::new(MemoryStore::new())
        }
        StorageBackend::Sqlite => {
            let pool = create_pool().await?;
            sqlx::migrate!("./migrations").run(&pool).await?;
            info!("Using sqlite storage backend");
            Arc::new(SqliteStore::new(pool))
        }
    };

    let app_state = AppState::new(store);

    let app = routes::api_router()
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
