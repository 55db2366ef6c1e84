use async_trait::async_trait;

use crate::lookup::{Channel, Deidentification, ReferenceData, Schema};
use crate::tagging::{Item, NewItem, Tag};

use super::Result;

/// Repository for tag operations.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Gets a tag by its ID.
    async fn get_tag(&self, id: i64) -> Result<Option<Tag>>;

    /// Creates a new tag and returns it with its assigned ID.
    ///
    /// Fails with `AlreadyExists` when the name is taken; nothing is written.
    async fn create_tag(&self, name: &str) -> Result<Tag>;
}

/// Repository for item operations.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Gets an item and the names of its tags.
    async fn get_item(&self, id: i64) -> Result<Option<Item>>;

    /// Creates an item, creating any missing tags and associating all of them.
    ///
    /// Atomic: on failure neither the item nor any newly-created tag persists.
    async fn create_item(&self, item: &NewItem) -> Result<Item>;
}

/// Read-only access to the lookup reference tables, plus provisioning.
#[async_trait]
pub trait ReferenceRepository: Send + Sync {
    /// Gets a schema exemplar by `metaid`.
    async fn get_schema(&self, metaid: &str) -> Result<Option<Schema>>;

    /// Gets a channel by `(channeltype, id)`.
    async fn get_channel(&self, channeltype: &str, id: &str) -> Result<Option<Channel>>;

    /// Gets a de-identification record by `(methodid, id)`.
    async fn get_deidentification(
        &self,
        methodid: &str,
        id: &str,
    ) -> Result<Option<Deidentification>>;

    /// Inserts or replaces the given reference rows in one transaction.
    async fn load_reference_data(&self, data: &ReferenceData) -> Result<()>;
}

/// Liveness of the storage backend.
#[async_trait]
pub trait StorageHealth: Send + Sync {
    /// Runs a trivial round trip against the backend.
    async fn ping(&self) -> Result<()>;
}
