// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! HTTP handlers for the item collection.
//!
//! Each handler acquires one session, runs one repository call on it and
//! releases it. An early return through `?` drops the session, which also
//! returns the connection to the pool.
//!
//! ```text
//! Client                Handler              Session              SQLite
//!   │ POST /items/         │                      │                   │
//!   │─────────────────────>│ store.session()      │                   │
//!   │                      │─────────────────────>│                   │
//!   │                      │ create(dto)          │ INSERT .. RETURNING
//!   │                      │─────────────────────>│──────────────────>│
//!   │                      │<─────────────────────│<──────────────────│
//!   │                      │ release()            │                   │
//!   │<─────────────────────│                      │                   │
//!   │ 200 ItemResponse     │                      │                   │
//! ```

use axum::extract::State;

use crate::{
    error::{AppError, AppResult},
    extract::{Json, Path},
    item::{CreateItemRequest, ItemRepository, ItemResponse},
    state::AppState
};
#[cfg(feature = "api")]
use crate::error::ErrorBody;

/// Create a new item.
#[cfg_attr(feature = "api", utoipa::path(
    post,
    path = "/items/",
    tag = "items",
    request_body = CreateItemRequest,
    responses(
        (status = 200, description = "Item created", body = ItemResponse),
        (status = 422, description = "Invalid payload", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
))]
pub async fn create_item(
    State(state): State<AppState>,
    Json(dto): Json<CreateItemRequest>
) -> AppResult<Json<ItemResponse>> {
    let mut session = state.store().session().await?;
    let item = session.create(dto).await?;
    session.release();

    tracing::info!(id = item.id, "item created");
    Ok(Json(ItemResponse::from(item)))
}

/// List every item in ascending id order.
#[cfg_attr(feature = "api", utoipa::path(
    get,
    path = "/items/",
    tag = "items",
    responses(
        (status = 200, description = "All items", body = [ItemResponse]),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
))]
pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<Vec<ItemResponse>>> {
    let mut session = state.store().session().await?;
    let items = session.list().await?;
    session.release();

    tracing::debug!(count = items.len(), "items listed");
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// Read one item by id.
#[cfg_attr(feature = "api", utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = "items",
    params(("item_id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorBody),
        (status = 422, description = "Id is not an integer", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
))]
pub async fn read_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>
) -> AppResult<Json<ItemResponse>> {
    let mut session = state.store().session().await?;
    let item = session.find_by_id(item_id).await?;
    session.release();

    tracing::debug!(item_id, found = item.is_some(), "item lookup");
    let item = item.ok_or(AppError::NotFound)?;
    Ok(Json(ItemResponse::from(item)))
}
