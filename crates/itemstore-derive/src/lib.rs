// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # itemstore-derive
//!
//! Procedural macro behind `itemstore_core::Entity`. Generates DTOs, row
//! mapping, a repository trait with its SQLite implementation, and schema DDL
//! from one struct definition.
//!
//! Use it through `itemstore-core`, which re-exports the derive and provides
//! the traits the generated code implements.
//!
//! # Attribute Quick Reference
//!
//! ```rust,ignore
//! #[derive(Entity)]
//! #[entity(table = "items")]              // Required: database table name
//! pub struct Item {
//!     #[id]                               // Store-assigned integer primary key
//!     pub id: i64,
//!
//!     #[field(create, response)]          // In CreateItemRequest and ItemResponse
//!     #[column(index)]                    // CREATE INDEX on this column
//!     pub name: String,
//!
//!     #[field(create, response)]
//!     pub description: String,
//!
//!     #[field(skip)]                      // Stored, never exposed
//!     #[column(name = "internal_note")]   // Custom column name
//!     pub note: Option<String>,
//! }
//! ```
//!
//! # Generated Code Overview
//!
//! | Generated Type | Description |
//! |----------------|-------------|
//! | `CreateItemRequest` | DTO for `POST` requests |
//! | `ItemResponse` | DTO for API responses |
//! | `ItemRow` | Database row mapping (`sqlx::FromRow`) |
//! | `InsertableItem` | Owned values for `INSERT` statements |
//! | `ItemRepository` | Async trait with `create`, `find_by_id`, `list` |
//! | `impl ItemRepository for sqlx::SqliteConnection` | SQLite implementation |
//! | `impl Schema for Item` | Table name and DDL constants |
//! | `From<...>` impls | Conversions between the structs above |
//!
//! # Feature Gates In Generated Code
//!
//! Generated code checks features of the crate that invokes the derive:
//!
//! - `sqlite` gates `sqlx::FromRow` on the row struct and the repository impl
//! - `api` gates `utoipa::ToSchema` on the DTOs

mod entity;
mod utils;

use proc_macro::TokenStream;

/// Derive macro generating the persistence and DTO layer for an entity.
///
/// See the [crate documentation](crate) for the supported attributes.
#[proc_macro_derive(Entity, attributes(entity, id, field, column))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive(input)
}
