mod error;
mod http_mapping;
#[cfg(feature = "sqlite")]
pub mod sqlite;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use traits::{ItemRepository, ReferenceRepository, StorageHealth, TagRepository};
pub use types::StorageBackend;
