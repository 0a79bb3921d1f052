// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQLite repository implementation generator.
//!
//! Generates `impl {Name}Repository for sqlx::SqliteConnection`:
//!
//! | Method | Query Pattern |
//! |--------|---------------|
//! | `create` | `INSERT INTO table (...) VALUES (?1, ...) RETURNING ...` |
//! | `find_by_id` | `SELECT ... FROM table WHERE id = ?1` |
//! | `list` | `SELECT ... FROM table ORDER BY id` |
//!
//! Implementing on the connection rather than the pool means every query
//! goes through the session the caller acquired.
//!
//! # Feature Flag
//!
//! Generated code is gated behind `#[cfg(feature = "sqlite")]`.

use proc_macro2::TokenStream;
use quote::quote;

use crate::{
    entity::parse::EntityDef,
    utils::sql::{insert_bindings, join_columns, placeholders}
};

/// Generate SQLite repository implementation.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let ctx = Context::new(entity);
    let trait_name = &ctx.trait_name;

    let create_impl = ctx.create_method();
    let find_impl = ctx.find_by_id_method();
    let list_impl = ctx.list_method();

    quote! {
        #[cfg(feature = "sqlite")]
        #[::itemstore_core::async_trait]
        impl #trait_name for sqlx::SqliteConnection {
            #create_impl
            #find_impl
            #list_impl
        }
    }
}

/// Precomputed identifiers and SQL fragments.
struct Context<'a> {
    entity:          &'a EntityDef,
    trait_name:      syn::Ident,
    entity_name:     &'a syn::Ident,
    row_name:        syn::Ident,
    insertable_name: syn::Ident,
    create_dto:      syn::Ident,
    table:           String,
    id_column:       String,
    id_type:         &'a syn::Type,
    select_columns:  String
}

impl<'a> Context<'a> {
    fn new(entity: &'a EntityDef) -> Self {
        let id_field = entity.id_field();

        Self {
            entity,
            trait_name: entity.ident_with("", "Repository"),
            entity_name: entity.name(),
            row_name: entity.ident_with("", "Row"),
            insertable_name: entity.ident_with("Insertable", ""),
            create_dto: entity.ident_with("Create", "Request"),
            table: entity.table.clone(),
            id_column: id_field.column_name(),
            id_type: id_field.ty(),
            select_columns: join_columns(entity.all_fields())
        }
    }

    fn create_method(&self) -> TokenStream {
        if self.entity.create_fields().is_empty() {
            return TokenStream::new();
        }

        let Self {
            entity_name,
            row_name,
            insertable_name,
            create_dto,
            ..
        } = self;
        let insert_fields = self.entity.insert_fields();
        let bindings = insert_bindings(&insert_fields);
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            self.table,
            join_columns(insert_fields.iter().copied()),
            placeholders(insert_fields.len()),
            self.select_columns
        );

        quote! {
            async fn create(&mut self, dto: #create_dto) -> Result<#entity_name, Self::Error> {
                let insertable = #insertable_name::from(dto);
                let row: #row_name = sqlx::query_as(#sql)
                    #(#bindings)*
                    .fetch_one(&mut *self)
                    .await?;
                Ok(#entity_name::from(row))
            }
        }
    }

    fn find_by_id_method(&self) -> TokenStream {
        let Self {
            entity_name,
            row_name,
            id_type,
            ..
        } = self;
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ?1",
            self.select_columns, self.table, self.id_column
        );

        quote! {
            async fn find_by_id(&mut self, id: #id_type) -> Result<Option<#entity_name>, Self::Error> {
                let row: Option<#row_name> = sqlx::query_as(#sql)
                    .bind(id)
                    .fetch_optional(&mut *self)
                    .await?;
                Ok(row.map(#entity_name::from))
            }
        }
    }

    fn list_method(&self) -> TokenStream {
        let Self {
            entity_name,
            row_name,
            ..
        } = self;
        let sql = format!(
            "SELECT {} FROM {} ORDER BY {}",
            self.select_columns, self.table, self.id_column
        );

        quote! {
            async fn list(&mut self) -> Result<Vec<#entity_name>, Self::Error> {
                let rows: Vec<#row_name> = sqlx::query_as(#sql)
                    .fetch_all(&mut *self)
                    .await?;
                Ok(rows.into_iter().map(#entity_name::from).collect())
            }
        }
    }
}
