use serde::{Deserialize, Serialize};

use super::error::TaggingError;
use super::operations::{dedupe_tag_names, validate_item_name, validate_tag_name};

/// A named tag. Names are unique across all tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

impl Tag {
    /// Creates a tag with an already-assigned identifier.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// An item together with the names of the tags it is associated with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub tag_names: Vec<String>,
}

/// A validated item that has not been persisted yet.
///
/// Construction goes through [`NewItem::new`], so the name is never blank and
/// `tag_names` never holds the same name twice. Storage backends rely on this
/// to insert one association row per tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    name: String,
    tag_names: Vec<String>,
}

impl NewItem {
    /// Validates the item and tag names and removes repeated tag names,
    /// keeping the first occurrence of each.
    pub fn new(name: impl Into<String>, tag_names: &[String]) -> Result<Self, TaggingError> {
        let name = name.into();
        validate_item_name(&name)?;
        for tag_name in tag_names {
            validate_tag_name(tag_name)?;
        }

        Ok(Self {
            name,
            tag_names: dedupe_tag_names(tag_names),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tag names in request order, without repeats.
    pub fn tag_names(&self) -> &[String] {
        &self.tag_names
    }

    /// Builds the persisted view once storage has assigned an identifier.
    pub fn into_item(self, id: i64) -> Item {
        Item {
            id,
            name: self.name,
            tag_names: self.tag_names,
        }
    }
}
