// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity derive macro implementation.
//!
//! Orchestrates parsing of the entity definition and delegates code
//! generation to the submodules below.
//!
//! # Architecture
//!
//! ```text
//! entity.rs (orchestrator)
//! │
//! ├── parse/         → Attribute parsing (EntityDef, FieldDef, ColumnConfig)
//! │
//! ├── dto.rs         → CreateRequest, Response
//! ├── repository.rs  → Repository trait definition
//! ├── row.rs         → Database row struct (sqlx::FromRow)
//! ├── insertable.rs  → Insertable struct for INSERT operations
//! ├── mappers.rs     → From implementations between types
//! ├── migrations/    → Schema impl with CREATE TABLE / CREATE INDEX DDL
//! │
//! └── sql/
//!     └── sqlite.rs  → SQLite (sqlx::SqliteConnection)
//! ```

mod dto;
mod insertable;
mod mappers;
mod migrations;
pub mod parse;
mod repository;
mod row;
mod sql;

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::EntityDef;

/// Main entry point for the Entity derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match EntityDef::from_derive_input(&input) {
        Ok(entity) => generate(&entity).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(entity: &EntityDef) -> proc_macro2::TokenStream {
    let dto = dto::generate(entity);
    let repository = repository::generate(entity);
    let row = row::generate(entity);
    let insertable = insertable::generate(entity);
    let mappers = mappers::generate(entity);
    let migrations = migrations::generate(entity);
    let sql = sql::generate(entity);

    quote! {
        #dto
        #repository
        #row
        #insertable
        #mappers
        #migrations
        #sql
    }
}
