//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. The three reference tables are independent; each is
//! queried by its exact primary key.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Message-body exemplars
CREATE TABLE IF NOT EXISTS schemas (
    metaid TEXT PRIMARY KEY,
    msgbody TEXT NOT NULL
);

-- Channel identifier maps
CREATE TABLE IF NOT EXISTS channels (
    channeltype TEXT NOT NULL,
    id TEXT NOT NULL,
    channlidmap TEXT NOT NULL,
    PRIMARY KEY (channeltype, id)
);

-- De-identification lookups
CREATE TABLE IF NOT EXISTS deidentifications (
    methodid TEXT NOT NULL,
    id TEXT NOT NULL,
    encryptedid TEXT NOT NULL,
    PRIMARY KEY (methodid, id)
);
"#;

// Schema queries
pub const SELECT_SCHEMA: &str = r#"
SELECT metaid, msgbody
FROM schemas
WHERE metaid = ?1
"#;

pub const UPSERT_SCHEMA: &str = r#"
INSERT OR REPLACE INTO schemas (metaid, msgbody)
VALUES (?1, ?2)
"#;

// Channel queries
pub const SELECT_CHANNEL: &str = r#"
SELECT channeltype, id, channlidmap
FROM channels
WHERE channeltype = ?1 AND id = ?2
"#;

pub const UPSERT_CHANNEL: &str = r#"
INSERT OR REPLACE INTO channels (channeltype, id, channlidmap)
VALUES (?1, ?2, ?3)
"#;

// De-identification queries
pub const SELECT_DEIDENTIFICATION: &str = r#"
SELECT methodid, id, encryptedid
FROM deidentifications
WHERE methodid = ?1 AND id = ?2
"#;

pub const UPSERT_DEIDENTIFICATION: &str = r#"
INSERT OR REPLACE INTO deidentifications (methodid, id, encryptedid)
VALUES (?1, ?2, ?3)
"#;

pub const PING: &str = "SELECT 1";
