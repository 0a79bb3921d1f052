// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field assignment utilities for `From` implementations.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use crate::entity::parse::FieldDef;

/// Generate `name: source.name` assignments.
pub fn assigns(fields: &[&FieldDef], source: &str) -> Vec<TokenStream> {
    let src = Ident::new(source, Span::call_site());
    fields
        .iter()
        .map(|f| {
            let name = f.name();
            quote! { #name: #src.#name }
        })
        .collect()
}

/// Generate `name: source.name.clone()` assignments.
pub fn assigns_clone(fields: &[&FieldDef], source: &str) -> Vec<TokenStream> {
    let src = Ident::new(source, Span::call_site());
    fields
        .iter()
        .map(|f| {
            let name = f.name();
            quote! { #name: #src.#name.clone() }
        })
        .collect()
}

/// Generate assignments filling an insertable from a create DTO.
///
/// Fields the DTO carries are moved over, the rest take
/// `Default::default()`.
pub fn create_assigns(insert_fields: &[&FieldDef], create_fields: &[&FieldDef]) -> Vec<TokenStream> {
    insert_fields
        .iter()
        .map(|f| {
            let name = f.name();
            if create_fields.iter().any(|cf| cf.name() == name) {
                quote! { #name: dto.#name }
            } else {
                quote! { #name: Default::default() }
            }
        })
        .collect()
}
