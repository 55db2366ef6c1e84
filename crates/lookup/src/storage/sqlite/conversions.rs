//! SQLite row conversion functions.

use catalog_core::lookup::{Channel, Deidentification, Schema};
use rusqlite::Row;

/// Expected columns: metaid, msgbody
pub fn row_to_schema(row: &Row) -> rusqlite::Result<Schema> {
    Ok(Schema {
        metaid: row.get(0)?,
        msgbody: row.get(1)?,
    })
}

/// Expected columns: channeltype, id, channlidmap
pub fn row_to_channel(row: &Row) -> rusqlite::Result<Channel> {
    Ok(Channel {
        channeltype: row.get(0)?,
        id: row.get(1)?,
        channlidmap: row.get(2)?,
    })
}

/// Expected columns: methodid, id, encryptedid
pub fn row_to_deidentification(row: &Row) -> rusqlite::Result<Deidentification> {
    Ok(Deidentification {
        methodid: row.get(0)?,
        id: row.get(1)?,
        encryptedid: row.get(2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_row_to_channel() {
        let conn = Connection::open_in_memory().unwrap();
        let channel = conn
            .query_row("SELECT 'sms', '42', '{\"a\":1}'", [], row_to_channel)
            .unwrap();

        assert_eq!(
            channel,
            Channel {
                channeltype: "sms".to_string(),
                id: "42".to_string(),
                channlidmap: "{\"a\":1}".to_string(),
            }
        );
    }

    #[test]
    fn test_non_text_column_is_an_error() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.query_row("SELECT 'm1', NULL", [], row_to_schema);

        assert!(result.is_err());
    }
}
