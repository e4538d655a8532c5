use std::sync::Arc;

use reel_core::origin::OriginGuard;
use reel_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// In-memory movie store.
    pub pool: DbPool,
    /// Allow-list checked by the origin middleware.
    pub origin_guard: Arc<OriginGuard>,
}

impl AppState {
    pub fn new(pool: DbPool, config: &ServerConfig) -> Self {
        let origin_guard = OriginGuard::new(config.cors_origins.iter().cloned());
        Self {
            pool,
            origin_guard: Arc::new(origin_guard),
        }
    }
}
