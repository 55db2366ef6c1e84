mod error;
mod operations;
mod requests;
mod types;

pub use error::TaggingError;
pub use operations::{dedupe_tag_names, validate_item_name, validate_tag_name};
pub use requests::{CreateItemRequest, CreateTagRequest};
pub use types::{Item, NewItem, Tag};
