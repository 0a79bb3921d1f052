// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! - [`ExposeConfig`]: DTO exposure (`#[field(create, response, skip)]`)
//! - [`ColumnConfig`]: column options (`#[column(index, unique, name = "..")]`)
//! - `#[id]`: store-assigned primary key

mod column;
mod expose;

pub use column::ColumnConfig;
pub use expose::ExposeConfig;
use syn::{Field, Ident, Type};

/// Integer types SQLite can hand back as a row id.
const INTEGER_TYPES: &[&str] = &["i8", "i16", "i32", "i64", "u8", "u16", "u32"];

/// Field definition with all parsed attributes.
///
/// ```rust,ignore
/// #[id]                       // is_id = true
/// pub id: i64,
///
/// #[field(create, response)]  // ExposeConfig
/// #[column(index)]            // ColumnConfig
/// pub name: String,
/// ```
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier (e.g., `id`, `name`).
    pub ident: Ident,

    /// Field type (e.g., `i64`, `String`, `Option<String>`).
    pub ty: Type,

    /// Whether this is the primary key field (`#[id]`).
    pub is_id: bool,

    /// DTO exposure configuration.
    pub expose: ExposeConfig,

    /// Column configuration for DDL and SQL.
    pub column: ColumnConfig
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// Returns error for unnamed fields and unknown `#[field]` / `#[column]`
    /// options.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Entity fields must be named").with_span(field)
        })?;

        let mut is_id = false;
        let mut expose = ExposeConfig::default();
        let mut column = ColumnConfig::default();

        for attr in &field.attrs {
            if attr.path().is_ident("id") {
                is_id = true;
            } else if attr.path().is_ident("field") {
                expose = ExposeConfig::from_attr(attr)?;
            } else if attr.path().is_ident("column") {
                column = ColumnConfig::from_attr(attr)?;
            }
        }

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            is_id,
            expose,
            column
        })
    }

    /// Field name as an identifier.
    #[must_use]
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Field name as a string.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// SQL column name: `#[column(name = "..")]` or the field name.
    #[must_use]
    pub fn column_name(&self) -> String {
        self.column.name.clone().unwrap_or_else(|| self.name_str())
    }

    /// Whether the column name differs from the field name.
    #[must_use]
    pub fn is_renamed(&self) -> bool {
        self.column.name.is_some()
    }

    /// Field type.
    #[must_use]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Column configuration.
    #[must_use]
    pub fn column(&self) -> &ColumnConfig {
        &self.column
    }

    /// Check if this is the primary key field.
    #[must_use]
    pub fn is_id(&self) -> bool {
        self.is_id
    }

    /// Check if field should be in `CreateRequest`.
    #[must_use]
    pub fn in_create(&self) -> bool {
        !self.expose.skip && self.expose.create
    }

    /// Check if field should be in `Response`. IDs always are, unless skipped.
    #[must_use]
    pub fn in_response(&self) -> bool {
        !self.expose.skip && (self.expose.response || self.is_id)
    }

    /// Check if the field type is one of the integer types SQLite returns
    /// for `INTEGER PRIMARY KEY`.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        if let Type::Path(type_path) = &self.ty
            && type_path.qself.is_none()
            && let Some(segment) = type_path.path.segments.last()
        {
            return INTEGER_TYPES.iter().any(|name| segment.ident == *name);
        }
        false
    }
}
