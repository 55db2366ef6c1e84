mod error;
mod http_mapping;
mod operations;
mod requests;
mod types;

pub use error::{LookupMiss, MissPolicy, ParseMissPolicyError};
pub use http_mapping::lookup_miss_to_status_code;
pub use operations::{compare_to_exemplar, SchemaCheck};
pub use requests::{
    ChannelSearchQuery, ChannelSearchResponse, DeidentifyQuery, DeidentifyResponse,
    SchemaValidateQuery, SchemaValidateResponse,
};
pub use types::{Channel, Deidentification, ReferenceData, Schema};
