// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! DTO generation for the Entity derive macro.
//!
//! | DTO | Fields | Derives |
//! |-----|--------|---------|
//! | `Create{Name}Request` | `#[field(create)]` | `Serialize`, `Deserialize`, `ToSchema` with `api` |
//! | `{Name}Response` | `#[id]` and `#[field(response)]` | `Serialize`, `Deserialize`, `ToSchema` with `api` |
//!
//! A DTO with no fields is not generated.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{EntityDef, FieldDef};

/// Generate all DTOs for the entity.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let create_dto = generate_create_dto(entity);
    let response_dto = generate_response_dto(entity);

    quote! {
        #create_dto
        #response_dto
    }
}

fn field_defs(fields: &[&FieldDef]) -> Vec<TokenStream> {
    fields
        .iter()
        .map(|f| {
            let name = f.name();
            let ty = f.ty();
            quote! { pub #name: #ty }
        })
        .collect()
}

fn generate_create_dto(entity: &EntityDef) -> TokenStream {
    let fields = entity.create_fields();
    if fields.is_empty() {
        return TokenStream::new();
    }

    let vis = &entity.vis;
    let name = entity.ident_with("Create", "Request");
    let field_defs = field_defs(&fields);

    quote! {
        /// Request DTO for creating a new entity.
        #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
        #[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
        #vis struct #name {
            #(#field_defs),*
        }
    }
}

fn generate_response_dto(entity: &EntityDef) -> TokenStream {
    let fields = entity.response_fields();
    if fields.is_empty() {
        return TokenStream::new();
    }

    let vis = &entity.vis;
    let name = entity.ident_with("", "Response");
    let field_defs = field_defs(&fields);

    quote! {
        /// Response DTO for API output.
        #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
        #[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
        #vis struct #name {
            #(#field_defs),*
        }
    }
}
