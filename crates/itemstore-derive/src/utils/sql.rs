// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL query building utilities.

use proc_macro2::TokenStream;
use quote::quote;

use crate::entity::parse::FieldDef;

/// Join column names with comma separator.
pub fn join_columns<'a>(fields: impl IntoIterator<Item = &'a FieldDef>) -> String {
    fields
        .into_iter()
        .map(FieldDef::column_name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build SQLite numbered placeholders: `?1, ?2, ?3, ...`
pub fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build `.bind(insertable.field)` chain.
pub fn insert_bindings(fields: &[&FieldDef]) -> Vec<TokenStream> {
    fields
        .iter()
        .map(|f| {
            let name = f.name();
            quote! { .bind(insertable.#name) }
        })
        .collect()
}
