// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Repository trait generation for the Entity derive macro.
//!
//! ```rust,ignore
//! #[itemstore_core::async_trait]
//! pub trait ItemRepository: itemstore_core::Repository {
//!     async fn create(&mut self, dto: CreateItemRequest) -> Result<Item, Self::Error>;
//!     async fn find_by_id(&mut self, id: i64) -> Result<Option<Item>, Self::Error>;
//!     async fn list(&mut self) -> Result<Vec<Item>, Self::Error>;
//! }
//! ```
//!
//! Methods take `&mut self` so the trait is implemented on a single
//! connection: each call runs inside whatever session the caller holds.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::EntityDef;

/// Generate the `{Name}Repository` trait.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let vis = &entity.vis;
    let entity_name = entity.name();
    let trait_name = entity.ident_with("", "Repository");
    let create_dto = entity.ident_with("Create", "Request");
    let id_type = entity.id_field().ty();
    let doc = format!("Repository trait for `{entity_name}` persistence operations.");

    let create_method = if entity.create_fields().is_empty() {
        TokenStream::new()
    } else {
        quote! {
            /// Insert a new entity and return it with its assigned id.
            async fn create(&mut self, dto: #create_dto) -> Result<#entity_name, Self::Error>;
        }
    };

    quote! {
        #[doc = #doc]
        #[::itemstore_core::async_trait]
        #vis trait #trait_name: ::itemstore_core::Repository {
            #create_method

            /// Find entity by ID.
            async fn find_by_id(&mut self, id: #id_type) -> Result<Option<#entity_name>, Self::Error>;

            /// List every stored entity in ascending id order.
            async fn list(&mut self) -> Result<Vec<#entity_name>, Self::Error>;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_uses_id_type() {
        let entity = EntityDef::from_derive_input(&syn::parse_quote! {
            #[entity(table = "items")]
            pub struct Item {
                #[id]
                pub id: i32,
                #[field(create, response)]
                pub name: String,
            }
        })
        .unwrap();

        let output = generate(&entity).to_string();
        assert!(output.contains("trait ItemRepository"));
        assert!(output.contains("itemstore_core :: Repository"));
        assert!(output.contains("id : i32"));
        assert!(output.contains("async fn create"));
        assert!(output.contains("async fn list"));
    }

    #[test]
    fn no_create_without_create_fields() {
        let entity = EntityDef::from_derive_input(&syn::parse_quote! {
            #[entity(table = "counters")]
            pub struct Counter {
                #[id]
                pub id: i64,
            }
        })
        .unwrap();

        let output = generate(&entity).to_string();
        assert!(!output.contains("async fn create"));
        assert!(output.contains("async fn find_by_id"));
    }
}
