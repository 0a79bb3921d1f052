// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column-level database configuration.
//!
//! | Attribute | Example | SQL |
//! |-----------|---------|-----|
//! | `index` | `#[column(index)]` | `CREATE INDEX IF NOT EXISTS idx_<table>_<column>` |
//! | `unique` | `#[column(unique)]` | `UNIQUE` |
//! | `name` | `#[column(name = "item_name")]` | Custom column name |

use syn::{Attribute, LitStr};

/// Column-level database configuration parsed from `#[column(...)]`.
#[derive(Debug, Clone, Default)]
pub struct ColumnConfig {
    /// Create a single-column index.
    pub index: bool,

    /// UNIQUE constraint on this column.
    pub unique: bool,

    /// Column name override.
    pub name: Option<String>
}

impl ColumnConfig {
    /// Parse `#[column(index, unique, name = "..")]`.
    ///
    /// # Errors
    ///
    /// Unknown options and non-string `name` values.
    pub fn from_attr(attr: &Attribute) -> darling::Result<Self> {
        let mut config = Self::default();

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("index") {
                config.index = true;
            } else if meta.path.is_ident("unique") {
                config.unique = true;
            } else if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                config.name = Some(value.value());
            } else {
                return Err(meta.error("expected `index`, `unique` or `name = \"...\"`"));
            }
            Ok(())
        })?;

        Ok(config)
    }

    /// Check if the column is indexed.
    #[must_use]
    pub fn has_index(&self) -> bool {
        self.index
    }
}
