//! SQLite repository implementation for the reference tables.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};
use tokio_rusqlite::Connection;

use catalog_core::lookup::{Channel, Deidentification, ReferenceData, Schema};
use catalog_core::storage::sqlite::{map_tokio_rusqlite_error, wrap_err};
use catalog_core::storage::{ReferenceRepository, RepositoryError, Result, StorageHealth};

use super::conversions::{row_to_channel, row_to_deidentification, row_to_schema};
use super::schema;

/// SQLite-based repository implementation.
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

        tracing::debug!(path, "Opened metadata database");
        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
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

#[async_trait]
impl ReferenceRepository for SqliteRepository {
    async fn get_schema(&self, metaid: &str) -> Result<Option<Schema>> {
        let key = metaid.to_string();

        self.conn
            .call(move |conn| {
                conn.query_row(schema::SELECT_SCHEMA, params![key], row_to_schema)
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Schema", metaid))
    }

    async fn get_channel(&self, channeltype: &str, id: &str) -> Result<Option<Channel>> {
        let (channeltype_key, id_key) = (channeltype.to_string(), id.to_string());

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::SELECT_CHANNEL,
                    params![channeltype_key, id_key],
                    row_to_channel,
                )
                .optional()
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Channel", format!("{channeltype}/{id}")))
    }

    async fn get_deidentification(
        &self,
        methodid: &str,
        id: &str,
    ) -> Result<Option<Deidentification>> {
        let (methodid_key, id_key) = (methodid.to_string(), id.to_string());

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::SELECT_DEIDENTIFICATION,
                    params![methodid_key, id_key],
                    row_to_deidentification,
                )
                .optional()
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| {
                map_tokio_rusqlite_error(e, "Deidentification", format!("{methodid}/{id}"))
            })
    }

    async fn load_reference_data(&self, data: &ReferenceData) -> Result<()> {
        let data = data.clone();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;

                for schema_row in &data.schemas {
                    tx.execute(
                        schema::UPSERT_SCHEMA,
                        params![schema_row.metaid, schema_row.msgbody],
                    )
                    .map_err(wrap_err)?;
                }
                for channel in &data.channels {
                    tx.execute(
                        schema::UPSERT_CHANNEL,
                        params![channel.channeltype, channel.id, channel.channlidmap],
                    )
                    .map_err(wrap_err)?;
                }
                for record in &data.deidentifications {
                    tx.execute(
                        schema::UPSERT_DEIDENTIFICATION,
                        params![record.methodid, record.id, record.encryptedid],
                    )
                    .map_err(wrap_err)?;
                }

                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "ReferenceData", "seed"))
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
