// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type mapping from Rust to SQLite column types.
//!
//! SQLite stores values under a handful of storage classes, so the mapping is
//! coarse:
//!
//! | Rust Type | SQLite Type | Notes |
//! |-----------|-------------|-------|
//! | `i8`..`i64`, `u8`..`u32` | `INTEGER` | |
//! | `bool` | `INTEGER` | 0 / 1 |
//! | `f32`, `f64` | `REAL` | |
//! | `String`, `str` | `TEXT` | |
//! | `Vec<u8>` | `BLOB` | |
//! | `Option<T>` | `T` | Nullable |
//! | anything else | `TEXT` | |

use syn::{GenericArgument, PathArguments, Type};

/// Mapped SQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlType {
    /// SQLite type name.
    pub name: &'static str,

    /// Whether the column allows NULL.
    pub nullable: bool
}

/// Maps Rust types to SQL column types.
pub trait TypeMapper {
    /// Map a field type to its column type.
    fn map_type(&self, ty: &Type) -> SqlType;
}

/// SQLite type mapper.
pub struct SqliteTypeMapper;

impl TypeMapper for SqliteTypeMapper {
    fn map_type(&self, ty: &Type) -> SqlType {
        if let Some(inner) = generic_inner(ty, "Option") {
            return SqlType {
                nullable: true,
                ..self.map_type(inner)
            };
        }

        if let Some(inner) = generic_inner(ty, "Vec")
            && last_segment(inner).as_deref() == Some("u8")
        {
            return SqlType {
                name:     "BLOB",
                nullable: false
            };
        }

        let name = match last_segment(ty).as_deref() {
            Some("i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" | "u64" | "bool") => {
                "INTEGER"
            }
            Some("f32" | "f64") => "REAL",
            _ => "TEXT"
        };

        SqlType {
            name,
            nullable: false
        }
    }
}

/// Last path segment of a type, e.g. `String` for `std::string::String`.
fn last_segment(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|s| s.ident.to_string()),
        Type::Reference(reference) => last_segment(&reference.elem),
        _ => None
    }
}

/// Inner type of a single-parameter generic such as `Option<T>`.
fn generic_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(ty: &str) -> SqlType {
        SqliteTypeMapper.map_type(&syn::parse_str(ty).unwrap())
    }

    #[test]
    fn integers_and_bool() {
        for ty in ["i32", "i64", "u16", "bool"] {
            assert_eq!(map(ty).name, "INTEGER");
            assert!(!map(ty).nullable);
        }
    }

    #[test]
    fn floats_and_text() {
        assert_eq!(map("f64").name, "REAL");
        assert_eq!(map("String").name, "TEXT");
        assert_eq!(map("std::string::String").name, "TEXT");
        assert_eq!(map("Uuid").name, "TEXT");
    }

    #[test]
    fn bytes_are_blob() {
        assert_eq!(map("Vec<u8>").name, "BLOB");
        assert_eq!(map("Vec<String>").name, "TEXT");
    }

    #[test]
    fn option_is_nullable() {
        let ty = map("Option<i64>");
        assert_eq!(ty.name, "INTEGER");
        assert!(ty.nullable);
    }
}
