//! In-memory storage backend.
//!
//! Tags and items live in arenas indexed by name, and each item keeps the IDs
//! of its tags. Everything sits behind one `RwLock`, so an item and the tags it
//! creates are written together or not at all. Data is lost on shutdown.

mod repository;

pub use repository::InMemoryRepository;
