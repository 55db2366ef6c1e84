//! Core for the catalog services.
//!
//! Pure domain types, validation and comparison functions, and the storage
//! traits shared by the `tagging` and `metadata_lookup` servers. Nothing in
//! here performs I/O except the optional SQLite error classifier.

pub mod lookup;
pub mod storage;
pub mod tagging;
