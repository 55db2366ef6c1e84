//! Reference lookup handlers.
//!
//! All three endpoints are POSTs that take their inputs as query parameters.

use axum::{
    extract::{Query, State},
    Json,
};

use catalog_core::lookup::{
    compare_to_exemplar, ChannelSearchQuery, ChannelSearchResponse, DeidentifyQuery,
    DeidentifyResponse, LookupMiss, SchemaValidateQuery, SchemaValidateResponse,
};
use catalog_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// Compare a message body against a stored exemplar (POST /schema/validate).
pub async fn schema_validate(
    State(state): State<AppState>,
    Query(query): Query<SchemaValidateQuery>,
) -> Result<Json<SchemaValidateResponse>, AppError> {
    let schema = state
        .reference_repo
        .get_schema(&query.metaid)
        .await?
        .ok_or_else(|| {
            AppError::miss(
                LookupMiss::Schema {
                    metaid: query.metaid.clone(),
                },
                state.miss_policy,
            )
        })?;

    let check = compare_to_exemplar(&schema.msgbody, &query.msgbody).map_err(|e| {
        RepositoryError::Serialization(format!("stored schema {} is not JSON: {e}", schema.metaid))
    })?;

    tracing::debug!(metaid = %query.metaid, matched = check.is_match(), "Validated message body");
    Ok(Json(check.into_response(&query.metaid)))
}

/// Find the identifier map for a channel (POST /channel/search).
pub async fn channel_search(
    State(state): State<AppState>,
    Query(query): Query<ChannelSearchQuery>,
) -> Result<Json<ChannelSearchResponse>, AppError> {
    let channel = state
        .reference_repo
        .get_channel(&query.channeltype, &query.id)
        .await?
        .ok_or_else(|| {
            AppError::miss(
                LookupMiss::Channel {
                    channeltype: query.channeltype.clone(),
                    id: query.id.clone(),
                },
                state.miss_policy,
            )
        })?;

    Ok(Json(ChannelSearchResponse {
        channlidmap: channel.channlidmap,
    }))
}

/// Look up the encrypted form of an identifier (POST /id/deidentify).
pub async fn id_deidentify(
    State(state): State<AppState>,
    Query(query): Query<DeidentifyQuery>,
) -> Result<Json<DeidentifyResponse>, AppError> {
    let record = state
        .reference_repo
        .get_deidentification(&query.methodid, &query.id)
        .await?
        .ok_or_else(|| {
            AppError::miss(
                LookupMiss::Deidentification {
                    methodid: query.methodid.clone(),
                    id: query.id.clone(),
                },
                state.miss_policy,
            )
        })?;

    Ok(Json(DeidentifyResponse {
        encryptedid: record.encryptedid,
    }))
}
