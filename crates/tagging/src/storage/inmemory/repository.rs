//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use catalog_core::storage::{
    ItemRepository, RepositoryError, Result, StorageHealth, TagRepository,
};
use catalog_core::tagging::{Item, NewItem, Tag};

#[derive(Debug)]
struct StoredItem {
    name: String,
    tag_ids: Vec<i64>,
}

/// Arena tables: an entity's ID is its position in the vector plus one.
#[derive(Debug, Default)]
struct Tables {
    tags: Vec<Tag>,
    tag_ids: HashMap<String, i64>,
    items: Vec<StoredItem>,
    item_ids: HashMap<String, i64>,
}

fn slot(id: i64) -> Option<usize> {
    id.checked_sub(1).and_then(|i| usize::try_from(i).ok())
}

impl Tables {
    fn tag(&self, id: i64) -> Option<&Tag> {
        slot(id).and_then(|i| self.tags.get(i))
    }

    fn insert_tag(&mut self, name: &str) -> i64 {
        let id = self.tags.len() as i64 + 1;
        self.tags.push(Tag::new(id, name));
        self.tag_ids.insert(name.to_string(), id);
        id
    }

    fn get_or_insert_tag(&mut self, name: &str) -> i64 {
        match self.tag_ids.get(name) {
            Some(id) => *id,
            None => self.insert_tag(name),
        }
    }

    fn item(&self, id: i64) -> Option<Item> {
        let stored = slot(id).and_then(|i| self.items.get(i))?;
        let tag_names = stored
            .tag_ids
            .iter()
            .filter_map(|tag_id| self.tag(*tag_id))
            .map(|tag| tag.name.clone())
            .collect();

        Some(Item {
            id,
            name: stored.name.clone(),
            tag_names,
        })
    }
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
impl TagRepository for InMemoryRepository {
    async fn get_tag(&self, id: i64) -> Result<Option<Tag>> {
        let tables = self.tables.read().await;
        Ok(tables.tag(id).cloned())
    }

    async fn create_tag(&self, name: &str) -> Result<Tag> {
        let mut tables = self.tables.write().await;
        if tables.tag_ids.contains_key(name) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Tag",
                id: name.to_string(),
            });
        }

        let id = tables.insert_tag(name);
        Ok(Tag::new(id, name))
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn get_item(&self, id: i64) -> Result<Option<Item>> {
        let tables = self.tables.read().await;
        Ok(tables.item(id))
    }

    async fn create_item(&self, item: &NewItem) -> Result<Item> {
        let mut tables = self.tables.write().await;

        // Checked before any tag is touched so a conflict writes nothing.
        if tables.item_ids.contains_key(item.name()) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Item",
                id: item.name().to_string(),
            });
        }

        let mut tag_ids = Vec::with_capacity(item.tag_names().len());
        for tag_name in item.tag_names() {
            tag_ids.push(tables.get_or_insert_tag(tag_name));
        }

        let id = tables.items.len() as i64 + 1;
        tables.items.push(StoredItem {
            name: item.name().to_string(),
            tag_ids,
        });
        tables.item_ids.insert(item.name().to_string(), id);

        Ok(item.clone().into_item(id))
    }
}

#[async_trait]
impl StorageHealth for InMemoryRepository {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
