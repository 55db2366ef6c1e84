//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use catalog_core::lookup::{Channel, Deidentification, ReferenceData, Schema};
use catalog_core::storage::{ReferenceRepository, Result, StorageHealth};

type PairKey = (String, String);

#[derive(Debug, Default)]
struct Tables {
    schemas: HashMap<String, Schema>,
    channels: HashMap<PairKey, Channel>,
    deidentifications: HashMap<PairKey, Deidentification>,
}

fn pair_key(a: &str, b: &str) -> PairKey {
    (a.to_string(), b.to_string())
}

/// In-memory storage backend.
///
/// Cloning shares the same underlying tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReferenceRepository for InMemoryRepository {
    async fn get_schema(&self, metaid: &str) -> Result<Option<Schema>> {
        let tables = self.tables.read().await;
        Ok(tables.schemas.get(metaid).cloned())
    }

    async fn get_channel(&self, channeltype: &str, id: &str) -> Result<Option<Channel>> {
        let tables = self.tables.read().await;
        Ok(tables.channels.get(&pair_key(channeltype, id)).cloned())
    }

    async fn get_deidentification(
        &self,
        methodid: &str,
        id: &str,
    ) -> Result<Option<Deidentification>> {
        let tables = self.tables.read().await;
        Ok(tables
            .deidentifications
            .get(&pair_key(methodid, id))
            .cloned())
    }

    async fn load_reference_data(&self, data: &ReferenceData) -> Result<()> {
        let mut tables = self.tables.write().await;

        for schema in &data.schemas {
            tables
                .schemas
                .insert(schema.metaid.clone(), schema.clone());
        }
        for channel in &data.channels {
            tables
                .channels
                .insert(pair_key(&channel.channeltype, &channel.id), channel.clone());
        }
        for record in &data.deidentifications {
            tables
                .deidentifications
                .insert(pair_key(&record.methodid, &record.id), record.clone());
        }

        Ok(())
    }
}

#[async_trait]
impl StorageHealth for InMemoryRepository {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
