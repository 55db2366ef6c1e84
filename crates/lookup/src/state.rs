//! Application state shared by the lookup handlers.

use std::sync::Arc;

use axum::extract::FromRef;
use catalog_core::lookup::MissPolicy;
use catalog_core::storage::{ReferenceRepository, RepositoryError, StorageBackend, StorageHealth};

use crate::config::Config;
use crate::storage::{InMemoryRepository, SqliteRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub reference_repo: Arc<dyn ReferenceRepository>,
    pub health: Arc<dyn StorageHealth>,
    pub miss_policy: MissPolicy,
}

impl AppState {
    /// Uses one repository for every storage concern.
    pub fn with_repository<R>(repo: Arc<R>, miss_policy: MissPolicy) -> Self
    where
        R: ReferenceRepository + StorageHealth + 'static,
    {
        Self {
            reference_repo: repo.clone(),
            health: repo,
            miss_policy,
        }
    }

    /// Opens the backend selected by the configuration.
    pub async fn from_config(config: &Config) -> Result<Self, RepositoryError> {
        match config.storage_backend {
            StorageBackend::Sqlite => {
                tracing::info!(path = %config.sqlite_path, "Using SQLite storage");
                let repo = SqliteRepository::new(&config.sqlite_path).await?;
                Ok(Self::with_repository(Arc::new(repo), config.miss_policy))
            }
            StorageBackend::Memory => {
                tracing::info!("Using in-memory storage");
                Ok(Self::with_repository(
                    Arc::new(InMemoryRepository::new()),
                    config.miss_policy,
                ))
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_repository(Arc::new(InMemoryRepository::new()), MissPolicy::default())
    }
}

impl FromRef<AppState> for Arc<dyn StorageHealth> {
    fn from_ref(state: &AppState) -> Self {
        state.health.clone()
    }
}
