// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The item entity.
//!
//! `#[derive(Entity)]` generates everything the handlers use:
//!
//! | Generated | Used For |
//! |-----------|----------|
//! | `CreateItemRequest` | `POST /items/` body |
//! | `ItemResponse` | Every response body |
//! | `ItemRepository` | `create`, `find_by_id`, `list` on a session |
//! | `impl Schema for Item` | `CREATE TABLE IF NOT EXISTS items` at start |

use itemstore_core::Entity;

/// A stored item.
#[derive(Debug, Clone, PartialEq, Eq, Entity)]
#[entity(table = "items")]
pub struct Item {
    /// Assigned by the store on insert, never reused.
    #[id]
    pub id: i64,

    #[field(create, response)]
    #[column(index)]
    pub name: String,

    #[field(create, response)]
    pub description: String
}
