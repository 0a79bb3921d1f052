// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mapper generation for the Entity derive macro.
//!
//! ```text
//! CreateRequest ──► Insertable ──► INSERT ... RETURNING ──► Row ──► Entity ──► Response
//!                      ▲                                              │
//!                      └──────────────────────────────────────────────┘
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::EntityDef;
use crate::utils::fields;

/// Generate all `From` implementations.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let row_to_entity = generate_row_to_entity(entity);
    let entity_to_insertable = generate_entity_to_insertable(entity);
    let entity_to_response = generate_entity_to_response(entity);
    let create_to_insertable = generate_create_to_insertable(entity);

    quote! {
        #row_to_entity
        #entity_to_insertable
        #entity_to_response
        #create_to_insertable
    }
}

fn generate_row_to_entity(entity: &EntityDef) -> TokenStream {
    let entity_name = entity.name();
    let row_name = entity.ident_with("", "Row");
    let all: Vec<_> = entity.all_fields().iter().collect();
    let assigns = fields::assigns(&all, "row");

    quote! {
        impl From<#row_name> for #entity_name {
            fn from(row: #row_name) -> Self {
                Self { #(#assigns),* }
            }
        }
    }
}

fn generate_entity_to_insertable(entity: &EntityDef) -> TokenStream {
    let entity_name = entity.name();
    let insertable_name = entity.ident_with("Insertable", "");
    let insert_fields = entity.insert_fields();
    let assigns = fields::assigns(&insert_fields, "entity");
    let assigns_clone = fields::assigns_clone(&insert_fields, "entity");

    quote! {
        impl From<#entity_name> for #insertable_name {
            fn from(entity: #entity_name) -> Self {
                Self { #(#assigns),* }
            }
        }

        impl From<&#entity_name> for #insertable_name {
            fn from(entity: &#entity_name) -> Self {
                Self { #(#assigns_clone),* }
            }
        }
    }
}

fn generate_entity_to_response(entity: &EntityDef) -> TokenStream {
    let response_fields = entity.response_fields();
    if response_fields.is_empty() {
        return TokenStream::new();
    }

    let entity_name = entity.name();
    let response_name = entity.ident_with("", "Response");
    let assigns = fields::assigns(&response_fields, "entity");
    let assigns_clone = fields::assigns_clone(&response_fields, "entity");

    quote! {
        impl From<#entity_name> for #response_name {
            fn from(entity: #entity_name) -> Self {
                Self { #(#assigns),* }
            }
        }

        impl From<&#entity_name> for #response_name {
            fn from(entity: &#entity_name) -> Self {
                Self { #(#assigns_clone),* }
            }
        }
    }
}

fn generate_create_to_insertable(entity: &EntityDef) -> TokenStream {
    let create_fields = entity.create_fields();
    if create_fields.is_empty() {
        return TokenStream::new();
    }

    let create_name = entity.ident_with("Create", "Request");
    let insertable_name = entity.ident_with("Insertable", "");
    let assigns = fields::create_assigns(&entity.insert_fields(), &create_fields);

    quote! {
        impl From<#create_name> for #insertable_name {
            fn from(dto: #create_name) -> Self {
                Self { #(#assigns),* }
            }
        }
    }
}
