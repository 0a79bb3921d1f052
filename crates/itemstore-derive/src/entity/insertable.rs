// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Insertable struct generation for INSERT operations.
//!
//! `Insertable{Name}` owns every value one `INSERT` binds. The `#[id]` field
//! is left out since the store assigns it.
//!
//! | Field Type | Included | Value Source |
//! |------------|----------|--------------|
//! | `#[id]` | No | Assigned by SQLite |
//! | `#[field(create)]` | Yes | From the `CreateRequest` DTO |
//! | `#[field(skip)]` | Yes | `Default::default()` |
//! | Other fields | Yes | `Default::default()` |

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::EntityDef;

/// Generates the `Insertable{Name}` struct.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let vis = &entity.vis;
    let insertable_name = entity.ident_with("Insertable", "");
    let field_defs = entity.insert_fields().into_iter().map(|f| {
        let name = f.name();
        let ty = f.ty();
        quote! { pub #name: #ty }
    });

    quote! {
        #[derive(Debug, Clone)]
        #vis struct #insertable_name { #(#field_defs),* }
    }
}
