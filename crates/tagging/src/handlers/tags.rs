//! Tag handlers.

use axum::{
    extract::{Path, State},
    Json,
};

use catalog_core::storage::RepositoryError;
use catalog_core::tagging::{validate_tag_name, CreateTagRequest, Tag};

use crate::{handlers::AppError, state::AppState};

/// Create a new tag (POST /tags).
pub async fn create_tag(
    State(state): State<AppState>,
    Json(payload): Json<CreateTagRequest>,
) -> Result<Json<Tag>, AppError> {
    validate_tag_name(&payload.name)?;

    let tag = state.tag_repo.create_tag(&payload.name).await?;

    tracing::info!(tag_id = tag.id, name = %tag.name, "Created tag");
    Ok(Json(tag))
}

/// Get a single tag by ID (GET /tags/{tag_id}).
pub async fn get_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<i64>,
) -> Result<Json<Tag>, AppError> {
    let tag = state
        .tag_repo
        .get_tag(tag_id)
        .await?
        .ok_or_else(|| RepositoryError::not_found("Tag", tag_id))?;

    Ok(Json(tag))
}
