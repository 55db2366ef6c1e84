use serde::{Deserialize, Serialize};

/// A stored message-body exemplar, keyed by `metaid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub metaid: String,
    /// Serialized JSON document the incoming bodies are compared against.
    pub msgbody: String,
}

/// A channel identifier map, keyed by `(channeltype, id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub channeltype: String,
    pub id: String,
    pub channlidmap: String,
}

/// A de-identification record, keyed by `(methodid, id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deidentification {
    pub methodid: String,
    pub id: String,
    pub encryptedid: String,
}

/// Reference rows provisioned out-of-band (the `--seed` document).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    #[serde(default)]
    pub schemas: Vec<Schema>,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub deidentifications: Vec<Deidentification>,
}

impl ReferenceData {
    /// Total number of rows across all three tables.
    pub fn len(&self) -> usize {
        self.schemas.len() + self.channels.len() + self.deidentifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
