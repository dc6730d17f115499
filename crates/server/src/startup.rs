use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use service::posts::PostStore;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load settings from `config.toml` (or `CONFIG_PATH`), falling back to env vars.
pub fn load_config() -> Result<AppConfig, StartupError> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            warn!(error = %e, "config file unavailable; using environment");
            AppConfig::from_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))
        }
    }
}

/// Post store as configured: seeded with the demo posts or empty.
pub fn build_store(cfg: &AppConfig) -> PostStore {
    if cfg.posts.seed {
        PostStore::seeded()
    } else {
        PostStore::new()
    }
}

/// Router with production layers for the given store.
pub fn build_app(store: PostStore) -> Router {
    routes::build_router(ServerState::new(store), build_cors())
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = cfg.bind_addr();
    raw.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address {raw}: {e}")))
}

/// Public entry: build the app and run the HTTP server.
/// The caller installs the tracing subscriber.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let cfg = load_config()?;
    let store = build_store(&cfg);
    let count = store.len().await;
    info!(posts = count, seeded = cfg.posts.seed, "post store ready");

    let app = build_app(store);

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting posts api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send<T: Send>(_: &T) {}

    #[test]
    fn run_future_can_be_spawned() {
        // never polled; only the Send bound required by tokio::spawn matters
        let fut = run();
        assert_send(&fut);
        drop(fut);
    }

    #[tokio::test]
    async fn build_store_honours_seed_flag() {
        let mut cfg = AppConfig::default();
        assert_eq!(build_store(&cfg).len().await, 2);
        cfg.posts.seed = false;
        assert!(build_store(&cfg).is_empty().await);
    }

    #[test]
    fn bind_addr_rejects_unparsable_host() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));
    }
}
