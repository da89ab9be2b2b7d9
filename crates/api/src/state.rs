use std::sync::Arc;

use movies_store::MovieStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory movie records, owned for the lifetime of the process.
    pub store: Arc<MovieStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state around a fresh, empty store.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: Arc::new(MovieStore::new()),
            config: Arc::new(config),
        }
    }
}
