//! Storage backend implementations.
//!
//! Concrete implementations of the tagging repository traits defined in
//! `catalog_core::storage`. The backend is chosen at startup from
//! `STORAGE_BACKEND` (see [`crate::config::Config`]).
//!
//! - `sqlite` (default): file-backed SQLite using `rusqlite` and `tokio-rusqlite`
//! - `memory`: process-local arenas, for development and tests

pub mod inmemory;
pub mod sqlite;

pub use inmemory::InMemoryRepository;
pub use sqlite::SqliteRepository;
