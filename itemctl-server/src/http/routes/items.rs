//! Item endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::db::Item;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidItemId};
use crate::http::server::AppState;
use crate::models::NewItem;

/// Create item request
///
/// `name` is optional here so a missing field becomes a validation error
/// instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Item response
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            created_at: item.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// Response for a newly created item
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i32,
    pub name: String,
}

/// Response for a delete request
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: i64,
}

/// GET /items - list all items, newest first
async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = state.store().list().await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// POST /items - create a new item
async fn create_item(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateItemRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let new_item = NewItem::new(req.name, req.description)?;
    let name = new_item.name.clone().into_string();
    let id = state.store().create(new_item).await?;

    tracing::info!(id, "Created item");
    Ok((StatusCode::CREATED, Json(CreatedResponse { id, name })))
}

/// DELETE /items/{id} - remove an item; absent ids still succeed
async fn delete_item(
    State(state): State<AppState>,
    ValidItemId(id): ValidItemId,
) -> Result<Json<DeletedResponse>, ApiError> {
    let removed = state.store().delete(id).await?;
    if removed {
        tracing::info!(%id, "Deleted item");
    } else {
        tracing::debug!(%id, "Delete requested for absent item");
    }

    Ok(Json(DeletedResponse { deleted: id.get() }))
}

/// Item routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", delete(delete_item))
}
