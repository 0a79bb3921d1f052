// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! DTO exposure configuration for entity fields.

use syn::Attribute;

/// Which generated DTOs a field appears in.
///
/// | Option | Effect |
/// |--------|--------|
/// | `create` | Include in `CreateRequest` |
/// | `response` | Include in `Response` |
/// | `skip` | Exclude from all DTOs, overrides the others |
#[derive(Debug, Default, Clone, Copy)]
pub struct ExposeConfig {
    /// Include in `CreateRequest` DTO.
    pub create: bool,

    /// Include in `Response` DTO.
    pub response: bool,

    /// Exclude from all DTOs.
    pub skip: bool
}

impl ExposeConfig {
    /// Parse `#[field(create, response, skip)]`.
    ///
    /// # Errors
    ///
    /// Unknown options are rejected with the span of the offending path.
    pub fn from_attr(attr: &Attribute) -> darling::Result<Self> {
        let mut config = Self::default();

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("create") {
                config.create = true;
            } else if meta.path.is_ident("response") {
                config.response = true;
            } else if meta.path.is_ident("skip") {
                config.skip = true;
            } else {
                return Err(meta.error("expected `create`, `response` or `skip`"));
            }
            Ok(())
        })?;

        Ok(config)
    }
}
