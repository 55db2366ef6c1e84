//! Storage backend implementations.
//!
//! Concrete implementations of [`catalog_core::storage::ReferenceRepository`].
//! The backend is chosen at startup from `STORAGE_BACKEND`.
//!
//! - `sqlite` (default): file-backed SQLite using `rusqlite` and `tokio-rusqlite`
//! - `memory`: process-local maps, for development and tests

pub mod inmemory;
pub mod sqlite;

pub use inmemory::InMemoryRepository;
pub use sqlite::SqliteRepository;
