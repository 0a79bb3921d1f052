// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # itemstore
//!
//! HTTP service that creates, lists and reads items kept in a SQLite file.
//!
//! # Endpoints
//!
//! | Method | Path | Body | Success | Failure |
//! |--------|------|------|---------|---------|
//! | `POST` | `/items/` | `{name, description}` | 200 `{id, name, description}` | 422 |
//! | `GET` | `/items/` | | 200 `[{id, name, description}]` | |
//! | `GET` | `/items/{item_id}` | | 200 `{id, name, description}` | 404, 422 |
//! | `GET` | `/openapi.json` | | 200 OpenAPI document | |
//!
//! The collection routes answer both with and without the trailing slash.
//!
//! # Architecture
//!
//! ```text
//! lib.rs (router)
//! │
//! ├── item.rs      → Item entity, #[derive(Entity)] generates DTOs and repository
//! ├── handlers.rs  → create / list / read, one session per request
//! ├── extract.rs   → Json and Path extractors rejecting with AppError
//! ├── error.rs     → AppError → status + {"detail"} body
//! ├── state.rs     → AppState holding the Store
//! ├── config.rs    → Fixed store URL and listen address
//! └── openapi.rs   → ApiDoc (feature `api`)
//! ```

#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

#[cfg(not(feature = "sqlite"))]
compile_error!("itemstore needs the `sqlite` feature for its repository implementation");

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod item;
#[cfg(feature = "api")]
pub mod openapi;
pub mod state;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{create_item, list_items, read_item},
    state::AppState
};

/// Build the service router.
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/", get(list_items).post(create_item))
        .route("/items/{item_id}", get(read_item));

    #[cfg(feature = "api")]
    let router = router.route("/openapi.json", get(openapi::serve));

    router
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
