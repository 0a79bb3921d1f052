// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity-level attribute parsing.
//!
//! Parses `#[entity(...)]` with darling and provides [`EntityDef`], the
//! structure consumed by every code generator.

use darling::FromDeriveInput;
use proc_macro2::Span;
use syn::{DeriveInput, Ident, Visibility};

use super::field::FieldDef;

/// Entity-level attributes parsed from `#[entity(...)]`.
///
/// Internal to darling; the public API is [`EntityDef`].
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity), supports(struct_named))]
struct EntityAttrs {
    /// Struct identifier (e.g., `Item`).
    ident: Ident,

    /// Struct visibility (e.g., `pub`, `pub(crate)`).
    vis: Visibility,

    /// Database table name. Required.
    table: String
}

/// Complete parsed entity definition.
///
/// Construction validates that exactly one integer `#[id]` field exists, so
/// generators can rely on [`EntityDef::id_field`] without checks.
#[derive(Debug)]
pub struct EntityDef {
    /// Struct identifier (e.g., `Item`).
    pub ident: Ident,

    /// Struct visibility, propagated to every generated type.
    pub vis: Visibility,

    /// Database table name (e.g., `"items"`).
    pub table: String,

    /// All field definitions from the struct, in declaration order.
    pub fields: Vec<FieldDef>,

    id_index: usize
}

impl EntityDef {
    /// Parse entity definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Missing `table` attribute
    /// - Applied to an enum, union, tuple struct or unit struct
    /// - Malformed `#[field(...)]` or `#[column(...)]` options
    /// - No `#[id]` field, more than one, or a non-integer one
    ///
    /// All field errors are accumulated and reported together.
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = EntityAttrs::from_derive_input(input)?;

        let named = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named,
                _ => {
                    return Err(darling::Error::custom("Entity requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("Entity can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        let mut errors = darling::Error::accumulator();
        let fields: Vec<FieldDef> = named
            .named
            .iter()
            .filter_map(|field| errors.handle(FieldDef::from_field(field)))
            .collect();
        let id_index = errors.handle(locate_id(&attrs.ident, &fields));

        errors.finish()?;

        Ok(Self {
            ident: attrs.ident,
            vis: attrs.vis,
            table: attrs.table,
            fields,
            id_index: id_index.unwrap_or_default()
        })
    }

    /// Get the primary key field marked with `#[id]`.
    pub fn id_field(&self) -> &FieldDef {
        &self.fields[self.id_index]
    }

    /// Fields included in the `CreateRequest` DTO.
    ///
    /// `#[field(create)]` fields that are neither `#[id]` nor skipped.
    pub fn create_fields(&self) -> Vec<&FieldDef> {
        self.fields
            .iter()
            .filter(|f| f.in_create() && !f.is_id())
            .collect()
    }

    /// Fields included in the `Response` DTO.
    ///
    /// `#[field(response)]` fields plus the `#[id]` field.
    pub fn response_fields(&self) -> Vec<&FieldDef> {
        self.fields.iter().filter(|f| f.in_response()).collect()
    }

    /// Fields written by `INSERT`: every column except the store-assigned id.
    pub fn insert_fields(&self) -> Vec<&FieldDef> {
        self.fields.iter().filter(|f| !f.is_id()).collect()
    }

    /// All fields, for Row structs and SELECT lists.
    pub fn all_fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Entity name as an identifier.
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Entity name as a string.
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// Create a new identifier with prefix and/or suffix.
    ///
    /// ```rust,ignore
    /// entity.ident_with("Create", "Request") // CreateItemRequest
    /// entity.ident_with("", "Response")      // ItemResponse
    /// entity.ident_with("", "Row")           // ItemRow
    /// entity.ident_with("Insertable", "")    // InsertableItem
    /// entity.ident_with("", "Repository")    // ItemRepository
    /// ```
    pub fn ident_with(&self, prefix: &str, suffix: &str) -> Ident {
        Ident::new(
            &format!("{}{}{}", prefix, self.name_str(), suffix),
            Span::call_site()
        )
    }
}

/// Find the single integer `#[id]` field.
fn locate_id(entity: &Ident, fields: &[FieldDef]) -> darling::Result<usize> {
    let ids: Vec<(usize, &FieldDef)> = fields
        .iter()
        .enumerate()
        .filter(|(_, f)| f.is_id())
        .collect();

    match ids.as_slice() {
        [] => Err(
            darling::Error::custom("Entity requires an #[id] field").with_span(entity)
        ),
        [(_, id)] if !id.is_integer() => Err(darling::Error::custom(
            "#[id] must be an integer type assigned by the store (e.g. i64)"
        )
        .with_span(&id.ident)),
        [(index, _)] => Ok(*index),
        [_, (_, extra), ..] => Err(
            darling::Error::custom("Entity supports exactly one #[id] field")
                .with_span(&extra.ident)
        )
    }
}
