use std::str::FromStr;

use super::RepositoryError;

/// Which storage backend a server runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// File-backed SQLite database.
    #[default]
    Sqlite,
    /// Process-local maps; data is lost on shutdown.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" | "inmemory" => Ok(StorageBackend::Memory),
            other => Err(RepositoryError::InvalidData(format!(
                "Unknown storage backend: {other} (expected 'sqlite' or 'memory')"
            ))),
        }
    }
}
