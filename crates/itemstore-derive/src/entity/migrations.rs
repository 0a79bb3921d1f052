// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Migration generation.
//!
//! Implements `itemstore_core::Schema` for the entity, carrying the table
//! name plus `MIGRATION_UP` and `MIGRATION_DOWN` DDL:
//!
//! ```rust,ignore
//! impl itemstore_core::Schema for Item {
//!     const TABLE: &'static str = "items";
//!     const MIGRATION_UP: &'static str = "CREATE TABLE IF NOT EXISTS items (...);\n...";
//!     const MIGRATION_DOWN: &'static str = "DROP TABLE IF EXISTS items;\n";
//! }
//! ```
//!
//! Every statement is idempotent, so applying `MIGRATION_UP` at each start
//! leaves an existing table and its rows alone.

mod ddl;
pub mod types;

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::EntityDef;

/// Generate the `Schema` implementation.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let entity_name = entity.name();
    let table = &entity.table;
    let up = ddl::generate_up(entity);
    let down = ddl::generate_down(entity);

    quote! {
        impl ::itemstore_core::Schema for #entity_name {
            const TABLE: &'static str = #table;
            const MIGRATION_UP: &'static str = #up;
            const MIGRATION_DOWN: &'static str = #down;
        }
    }
}
