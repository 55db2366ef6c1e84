//! SQLite repository implementation.
//!
//! Implements the tagging repository traits from `catalog_core::storage` using SQLite.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Transaction};
use tokio_rusqlite::Connection;

use catalog_core::storage::sqlite::{map_tokio_rusqlite_error, wrap_err};
use catalog_core::storage::{
    ItemRepository, RepositoryError, Result, StorageHealth, TagRepository,
};
use catalog_core::tagging::{Item, NewItem, Tag};

use super::conversions::{row_to_item_header, row_to_tag};
use super::schema;

/// SQLite-based repository implementation.
///
/// All access goes through a single `tokio_rusqlite::Connection`, which owns
/// the underlying connection on a dedicated thread and runs calls in order.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::debug!(path, "Opened tagging database");
        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

/// Returns the ID of the tag with this name, inserting it first if needed.
fn get_or_create_tag(tx: &Transaction<'_>, name: &str) -> rusqlite::Result<i64> {
    let existing: Option<i64> = tx
        .query_row(schema::SELECT_TAG_ID_BY_NAME, params![name], |row| row.get(0))
        .optional()?;

    match existing {
        Some(id) => Ok(id),
        None => {
            tx.execute(schema::INSERT_TAG, params![name])?;
            Ok(tx.last_insert_rowid())
        }
    }
}

fn tag_names_for_item(conn: &rusqlite::Connection, item_id: i64) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare(schema::SELECT_TAG_NAMES_FOR_ITEM)?;
    let rows = stmt.query_map(params![item_id], |row| row.get(0))?;
    rows.collect()
}

// ============================================================================
// TagRepository implementation
// ============================================================================

#[async_trait]
impl TagRepository for SqliteRepository {
    async fn get_tag(&self, id: i64) -> Result<Option<Tag>> {
        self.conn
            .call(move |conn| {
                conn.query_row(schema::SELECT_TAG_BY_ID, params![id], row_to_tag)
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Tag", id.to_string()))
    }

    async fn create_tag(&self, name: &str) -> Result<Tag> {
        let name = name.to_string();
        let tag_name = name.clone();

        let tag = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tx.execute(schema::INSERT_TAG, params![name])
                    .map_err(wrap_err)?;
                let id = tx.last_insert_rowid();
                tx.commit().map_err(wrap_err)?;
                Ok(Tag { id, name })
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Tag", tag_name))?;

        tracing::debug!(tag_id = tag.id, name = %tag.name, "Inserted tag");
        Ok(tag)
    }
}

// ============================================================================
// ItemRepository implementation
// ============================================================================

#[async_trait]
impl ItemRepository for SqliteRepository {
    async fn get_item(&self, id: i64) -> Result<Option<Item>> {
        self.conn
            .call(move |conn| {
                let header = conn
                    .query_row(schema::SELECT_ITEM_BY_ID, params![id], row_to_item_header)
                    .optional()
                    .map_err(wrap_err)?;

                let Some((id, name)) = header else {
                    return Ok(None);
                };

                let tag_names = tag_names_for_item(conn, id).map_err(wrap_err)?;
                Ok(Some(Item {
                    id,
                    name,
                    tag_names,
                }))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Item", id.to_string()))
    }

    async fn create_item(&self, item: &NewItem) -> Result<Item> {
        let new_item = item.clone();
        let item_name = item.name().to_string();

        // The transaction rolls back when dropped, so every early return
        // below leaves neither the item nor any new tag behind.
        let item_id = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;

                tx.execute(schema::INSERT_ITEM, params![new_item.name()])
                    .map_err(wrap_err)?;
                let item_id = tx.last_insert_rowid();

                for tag_name in new_item.tag_names() {
                    let tag_id = get_or_create_tag(&tx, tag_name).map_err(wrap_err)?;
                    tx.execute(schema::INSERT_ITEM_TAG, params![tag_id, item_id])
                        .map_err(wrap_err)?;
                }

                tx.commit().map_err(wrap_err)?;
                Ok(item_id)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Item", item_name))?;

        tracing::debug!(
            item_id,
            name = %item.name(),
            tags = item.tag_names().len(),
            "Inserted item"
        );
        Ok(item.clone().into_item(item_id))
    }
}

#[async_trait]
impl StorageHealth for SqliteRepository {
    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Database", "ping"))
    }
}
