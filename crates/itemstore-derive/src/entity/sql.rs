// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL implementation generation for the Entity derive macro.
//!
//! | Backend | Feature | Implemented On |
//! |---------|---------|----------------|
//! | SQLite | `sqlite` | `sqlx::SqliteConnection` |

mod sqlite;

use proc_macro2::TokenStream;

use super::parse::EntityDef;

/// Generate the repository implementation for every supported backend.
pub fn generate(entity: &EntityDef) -> TokenStream {
    sqlite::generate(entity)
}
