//! Item handlers.
//!
//! Creating an item resolves its tag names with get-or-create semantics inside
//! the repository's transaction.

use axum::{
    extract::{Path, State},
    Json,
};

use catalog_core::storage::RepositoryError;
use catalog_core::tagging::{CreateItemRequest, Item};

use crate::{handlers::AppError, state::AppState};

/// Create a new item and associate it with its tags (POST /items).
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateItemRequest>,
) -> Result<Json<Item>, AppError> {
    let new_item = payload.into_new_item()?;

    let item = state.item_repo.create_item(&new_item).await?;

    tracing::info!(
        item_id = item.id,
        name = %item.name,
        tag_names = ?item.tag_names,
        "Created item"
    );
    Ok(Json(item))
}

/// Get a single item and its tag names (GET /items/{item_id}).
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<Json<Item>, AppError> {
    let item = state
        .item_repo
        .get_item(item_id)
        .await?
        .ok_or_else(|| RepositoryError::not_found("Item", item_id))?;

    Ok(Json(item))
}
