//! In-memory storage backend.
//!
//! Each reference table is a `HashMap` keyed by its primary key. Data is lost
//! on shutdown, so this backend is only useful together with `--seed`.

mod repository;

pub use repository::InMemoryRepository;
