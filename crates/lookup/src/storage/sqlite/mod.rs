//! SQLite storage backend implementation.
//!
//! The reference tables live in SQLite, read through `tokio-rusqlite` and
//! written only by seed provisioning.

mod conversions;
mod repository;
mod schema;

pub use repository::SqliteRepository;
