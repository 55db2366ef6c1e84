//! API request types for the tagging service.

use serde::{Deserialize, Serialize};

use super::error::TaggingError;
use super::types::NewItem;

/// Request payload for creating a tag (POST /tags).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTagRequest {
    pub name: String,
}

impl CreateTagRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Request payload for creating an item (POST /items).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default)]
    pub tag_names: Vec<String>,
}

impl CreateItemRequest {
    /// Create a new request with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag_names: Vec::new(),
        }
    }

    /// Add a tag name to the request.
    pub fn with_tag(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_names.push(tag_name.into());
        self
    }

    /// Validates the request into an item ready for storage.
    pub fn into_new_item(self) -> Result<NewItem, TaggingError> {
        NewItem::new(self.name, &self.tag_names)
    }
}
