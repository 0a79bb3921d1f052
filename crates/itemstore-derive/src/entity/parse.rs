// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Entity derive macro.
//!
//! Entity-level attributes (`#[entity(table = "items")]`) are parsed with
//! [`darling`]'s `FromDeriveInput`. Field-level attributes (`#[id]`,
//! `#[field(...)]`, `#[column(...)]`) are marker style and parsed by hand with
//! `parse_nested_meta`.
//!
//! # Data Structures
//!
//! ```text
//! EntityDef
//! ├── ident: Ident          (struct name, e.g., "Item")
//! ├── vis: Visibility       (pub, pub(crate), etc.)
//! ├── table: String         (database table name)
//! └── fields: Vec<FieldDef>
//!     └── FieldDef
//!         ├── ident: Ident          (field name)
//!         ├── ty: Type              (field type)
//!         ├── is_id: bool           (#[id] present)
//!         ├── expose: ExposeConfig  (#[field(create, response, skip)])
//!         └── column: ColumnConfig  (#[column(index, unique, name = "..")])
//! ```

mod entity;
mod field;

pub use entity::EntityDef;
pub use field::FieldDef;
