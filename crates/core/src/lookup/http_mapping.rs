//! Pure function for mapping lookup misses to HTTP status codes.

use super::error::{LookupMiss, MissPolicy};

/// Maps a [`LookupMiss`] to an HTTP status code under the given policy.
///
/// - `Legacy`: `Schema` and `Channel` -> 204, `Deidentification` -> 503
/// - `NotFound`: every miss -> 404
///
/// # Examples
///
/// ```
/// use catalog_core::lookup::{lookup_miss_to_status_code, LookupMiss, MissPolicy};
///
/// let miss = LookupMiss::Deidentification {
///     methodid: "aes".to_string(),
///     id: "7".to_string(),
/// };
/// assert_eq!(lookup_miss_to_status_code(&miss, MissPolicy::Legacy), 503);
/// assert_eq!(lookup_miss_to_status_code(&miss, MissPolicy::NotFound), 404);
/// ```
pub fn lookup_miss_to_status_code(miss: &LookupMiss, policy: MissPolicy) -> u16 {
    match (policy, miss) {
        (MissPolicy::NotFound, _) => 404,
        (MissPolicy::Legacy, LookupMiss::Schema { .. }) => 204,
        (MissPolicy::Legacy, LookupMiss::Channel { .. }) => 204,
        (MissPolicy::Legacy, LookupMiss::Deidentification { .. }) => 503,
    }
}
