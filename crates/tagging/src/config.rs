use std::{env, time::Duration};

use catalog_core::storage::StorageBackend;
use catalog_server::parse_origins;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "tagging.db")
    pub sqlite_path: String,
    /// Storage backend (default: sqlite)
    pub storage_backend: StorageBackend,
    /// Allowed CORS origins; `*` allows any (default: ["*"])
    pub cors_allowed_origins: Vec<String>,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "tagging.db")
    /// - `STORAGE_BACKEND` - `sqlite` or `memory` (default: sqlite)
    /// - `CORS_ALLOWED_ORIGINS` - Comma-separated origins (default: "*")
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    ///
    /// Unparseable values fall back to the default with a warning.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or(defaults.sqlite_path),
            storage_backend: env::var("STORAGE_BACKEND")
                .ok()
                .and_then(|v| {
                    v.parse::<StorageBackend>()
                        .inspect_err(|e| tracing::warn!(error = %e, "Ignoring STORAGE_BACKEND"))
                        .ok()
                })
                .unwrap_or(defaults.storage_backend),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or(defaults.cors_allowed_origins),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_seconds),
        }
    }

    /// Get request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sqlite_path: "tagging.db".to_string(),
            storage_backend: StorageBackend::Sqlite,
            cors_allowed_origins: vec!["*".to_string()],
            request_timeout_seconds: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            request_timeout_seconds: 30,
            ..Config::default()
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.sqlite_path, "tagging.db");
        assert_eq!(config.storage_backend, StorageBackend::Sqlite);
        assert_eq!(config.cors_allowed_origins, vec!["*".to_string()]);
        assert_eq!(config.request_timeout_seconds, 10);
    }
}
