//! Query parameters and response bodies for the lookup endpoints.
//!
//! All three endpoints take their inputs as query parameters on a POST.

use serde::{Deserialize, Serialize};

/// Query for POST /schema/validate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaValidateQuery {
    pub metaid: String,
    pub msgbody: String,
}

/// Response for POST /schema/validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaValidateResponse {
    pub result: bool,
    /// Empty when `result` is true.
    pub errormsg: String,
}

/// Query for POST /channel/search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelSearchQuery {
    pub channeltype: String,
    pub id: String,
}

/// Response for POST /channel/search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSearchResponse {
    pub channlidmap: String,
}

/// Query for POST /id/deidentify.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeidentifyQuery {
    pub methodid: String,
    pub id: String,
}

/// Response for POST /id/deidentify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeidentifyResponse {
    pub encryptedid: String,
}
