//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use catalog_core::tagging::Tag;
use rusqlite::Row;

/// Convert a SQLite row to a Tag.
///
/// Expected columns: id, name
pub fn row_to_tag(row: &Row) -> rusqlite::Result<Tag> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;

    Ok(Tag { id, name })
}

/// Convert a SQLite row to an item's `(id, name)` pair.
///
/// Tag names come from a separate join query.
///
/// Expected columns: id, name
pub fn row_to_item_header(row: &Row) -> rusqlite::Result<(i64, String)> {
    Ok((row.get(0)?, row.get(1)?))
}
