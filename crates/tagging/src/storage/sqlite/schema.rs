//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
///
/// `foreign_keys` is a per-connection setting, so it is switched on here,
/// once, when the connection is opened.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Tags table
CREATE TABLE IF NOT EXISTS tags (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

-- Items table
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

-- Association table (many-to-many edge between items and tags)
CREATE TABLE IF NOT EXISTS item_tags (
    tag_id INTEGER NOT NULL,
    item_id INTEGER NOT NULL,
    PRIMARY KEY (tag_id, item_id),
    FOREIGN KEY (tag_id) REFERENCES tags(id),
    FOREIGN KEY (item_id) REFERENCES items(id)
);

CREATE INDEX IF NOT EXISTS idx_item_tags_item_id ON item_tags(item_id);
"#;

// Tag queries
pub const INSERT_TAG: &str = r#"
INSERT INTO tags (name)
VALUES (?1)
"#;

pub const SELECT_TAG_BY_ID: &str = r#"
SELECT id, name
FROM tags
WHERE id = ?1
"#;

pub const SELECT_TAG_ID_BY_NAME: &str = r#"
SELECT id
FROM tags
WHERE name = ?1
"#;

// Item queries
pub const INSERT_ITEM: &str = r#"
INSERT INTO items (name)
VALUES (?1)
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, name
FROM items
WHERE id = ?1
"#;

// Association queries
pub const INSERT_ITEM_TAG: &str = r#"
INSERT INTO item_tags (tag_id, item_id)
VALUES (?1, ?2)
"#;

pub const SELECT_TAG_NAMES_FOR_ITEM: &str = r#"
SELECT t.name
FROM tags t
INNER JOIN item_tags it ON t.id = it.tag_id
WHERE it.item_id = ?1
ORDER BY it.rowid ASC
"#;

pub const PING: &str = "SELECT 1";
