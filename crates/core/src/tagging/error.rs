use thiserror::Error;

/// Errors that can occur when validating tags and items before storage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaggingError {
    #[error("Tag name cannot be empty")]
    EmptyTagName,
    #[error("Item name cannot be empty")]
    EmptyItemName,
}
