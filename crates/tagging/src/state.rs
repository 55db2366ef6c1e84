//! Application state with repository-based storage.
//!
//! Shared state passed to every request handler. Storage is reached through
//! repository trait objects so handlers don't know which backend is running.

use std::sync::Arc;

use axum::extract::FromRef;
use catalog_core::storage::{
    ItemRepository, RepositoryError, StorageBackend, StorageHealth, TagRepository,
};

use crate::config::Config;
use crate::storage::{InMemoryRepository, SqliteRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub tag_repo: Arc<dyn TagRepository>,
    pub item_repo: Arc<dyn ItemRepository>,
    pub health: Arc<dyn StorageHealth>,
}

impl AppState {
    /// Uses one repository for every storage concern.
    pub fn with_repository<R>(repo: Arc<R>) -> Self
    where
        R: TagRepository + ItemRepository + StorageHealth + 'static,
    {
        Self {
            tag_repo: repo.clone(),
            item_repo: repo.clone(),
            health: repo,
        }
    }

    /// Opens the backend selected by the configuration.
    pub async fn from_config(config: &Config) -> Result<Self, RepositoryError> {
        match config.storage_backend {
            StorageBackend::Sqlite => {
                tracing::info!(path = %config.sqlite_path, "Using SQLite storage");
                let repo = SqliteRepository::new(&config.sqlite_path).await?;
                Ok(Self::with_repository(Arc::new(repo)))
            }
            StorageBackend::Memory => {
                tracing::info!("Using in-memory storage");
                Ok(Self::default())
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_repository(Arc::new(InMemoryRepository::new()))
    }
}

impl FromRef<AppState> for Arc<dyn StorageHealth> {
    fn from_ref(state: &AppState) -> Self {
        state.health.clone()
    }
}
