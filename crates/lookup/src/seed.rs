//! Out-of-band provisioning of the reference tables.
//!
//! The seed file is a JSON document shaped like [`ReferenceData`]:
//!
//! ```json
//! {
//!   "schemas": [{"metaid": "order.v1", "msgbody": "{\"order\":1}"}],
//!   "channels": [{"channeltype": "sms", "id": "42", "channlidmap": "{}"}],
//!   "deidentifications": [{"methodid": "aes", "id": "7", "encryptedid": "x9f2"}]
//! }
//! ```
//!
//! Every section is optional. Existing rows with the same key are replaced.

use std::path::Path;

use anyhow::{Context, Result};

use catalog_core::lookup::ReferenceData;
use catalog_core::storage::ReferenceRepository;

/// Parses a seed document.
pub fn parse_seed(contents: &str) -> Result<ReferenceData> {
    serde_json::from_str(contents).context("Seed file is not a valid reference document")
}

/// Reads the seed file at `path` and loads it into `repo`.
///
/// Returns the number of rows written.
pub async fn load_seed_file(path: &Path, repo: &dyn ReferenceRepository) -> Result<usize> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let data = parse_seed(&contents)?;

    repo.load_reference_data(&data).await?;

    tracing::info!(
        path = %path.display(),
        schemas = data.schemas.len(),
        channels = data.channels.len(),
        deidentifications = data.deidentifications.len(),
        "Loaded reference data"
    );
    Ok(data.len())
}
