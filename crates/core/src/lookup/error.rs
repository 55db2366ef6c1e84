use std::str::FromStr;

use thiserror::Error;

/// A reference-table query that found no row.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupMiss {
    #[error("Schema not found: {metaid}")]
    Schema { metaid: String },
    #[error("Channel not found: {channeltype}/{id}")]
    Channel { channeltype: String, id: String },
    #[error("Deidentification unavailable: {methodid}/{id}")]
    Deidentification { methodid: String, id: String },
}

/// How lookup misses are reported over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissPolicy {
    /// 204 for schema and channel misses, 503 for de-identification misses.
    #[default]
    Legacy,
    /// 404 for every miss.
    NotFound,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown lookup miss policy: {0} (expected 'legacy' or 'not-found')")]
pub struct ParseMissPolicyError(pub String);

impl FromStr for MissPolicy {
    type Err = ParseMissPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(MissPolicy::Legacy),
            "not-found" | "not_found" | "404" => Ok(MissPolicy::NotFound),
            other => Err(ParseMissPolicyError(other.to_string())),
        }
    }
}
