// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! OpenAPI document, served at `GET /openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use crate::{
    error::ErrorBody,
    handlers,
    item::{CreateItemRequest, ItemResponse}
};

/// API description covering every item operation.
#[derive(OpenApi)]
#[openapi(
    info(title = "itemstore", description = "Create, list and read items"),
    paths(handlers::create_item, handlers::list_items, handlers::read_item),
    components(schemas(CreateItemRequest, ItemResponse, ErrorBody)),
    tags((name = "items", description = "Item management"))
)]
pub struct ApiDoc;

/// Serve the generated document.
pub async fn serve() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
