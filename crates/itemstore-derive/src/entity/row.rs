// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Database row struct generation.
//!
//! Generates a `{Name}Row` struct that maps directly to query results:
//!
//! ```rust,ignore
//! #[derive(Debug, Clone)]
//! #[cfg_attr(feature = "sqlite", derive(sqlx::FromRow))]
//! pub struct ItemRow {
//!     pub id: i64,
//!     pub name: String,
//!     pub description: String,
//! }
//! ```
//!
//! Unlike DTOs, the row includes every field, skipped ones too. Fields with
//! `#[column(name = "..")]` get a matching `#[sqlx(rename = "..")]`.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::EntityDef;

/// Generates the `{Name}Row` struct for database query results.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let vis = &entity.vis;
    let row_name = entity.ident_with("", "Row");
    let field_defs = entity.all_fields().iter().map(|f| {
        let name = f.name();
        let ty = f.ty();
        if f.is_renamed() {
            let column = f.column_name();
            quote! {
                #[cfg_attr(feature = "sqlite", sqlx(rename = #column))]
                pub #name: #ty
            }
        } else {
            quote! { pub #name: #ty }
        }
    });

    quote! {
        #[derive(Debug, Clone)]
        #[cfg_attr(feature = "sqlite", derive(sqlx::FromRow))]
        #vis struct #row_name { #(#field_defs),* }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_has_every_field() {
        let entity = EntityDef::from_derive_input(&syn::parse_quote! {
            #[entity(table = "items")]
            pub struct Item {
                #[id]
                pub id: i64,
                #[field(create, response)]
                pub name: String,
                #[field(skip)]
                #[column(name = "internal_note")]
                pub note: Option<String>,
            }
        })
        .unwrap();

        let output = generate(&entity).to_string();
        assert!(output.contains("ItemRow"));
        assert!(output.contains("sqlx :: FromRow"));
        assert!(output.contains("pub id : i64"));
        assert!(output.contains("pub note : Option < String >"));
        assert!(output.contains("rename = \"internal_note\""));
    }
}
