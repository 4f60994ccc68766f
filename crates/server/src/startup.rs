use std::{future::Future, sync::Arc};

use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use service::{InMemoryCatalog, RestaurantCatalog, StarredRestaurantsService};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Catalog from `catalog.path` when configured, otherwise the builtin dataset.
async fn load_catalog(cfg: &AppConfig) -> anyhow::Result<Arc<dyn RestaurantCatalog>> {
    let catalog = match cfg.catalog.path.as_deref() {
        Some(path) => InMemoryCatalog::load(path).await?,
        None => {
            let builtin = InMemoryCatalog::builtin();
            info!(count = builtin.len(), "using builtin restaurant catalog");
            builtin
        }
    };
    let catalog: Arc<dyn RestaurantCatalog> = Arc::new(catalog);
    Ok(catalog)
}

/// Wire catalog and starred service into the shared router state.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let catalog = load_catalog(cfg).await?;
    let starred = if cfg.starred.seed_defaults {
        StarredRestaurantsService::seeded(catalog).await
    } else {
        StarredRestaurantsService::new(catalog)
    };
    info!(count = starred.len().await, "starred restaurants ready");
    Ok(ServerState::new(starred))
}

/// Build the app from configuration without binding a socket.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let state = build_state(cfg).await?;
    Ok(routes::build_router(state, build_cors()))
}

/// Public entry: load `.env` and configuration, then serve until the process is stopped.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load_or_env()?;
    run_until(cfg, std::future::pending()).await
}

/// Build the app from an already loaded config and serve until `shutdown`
/// resolves, then drain in-flight requests.
pub async fn run_until<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg).await?;

    let listener = TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starred restaurants server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("server drained");
    Ok(())
}
