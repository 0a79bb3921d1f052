// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! No create fields: no CreateRequest, and the repository has no `create`.

use itemstore_core::Entity;

#[derive(Debug, Clone, Entity)]
#[entity(table = "logs")]
pub struct Log {
    #[id]
    pub id: i32,

    #[field(response)]
    pub message: String,

    #[field(response)]
    pub level: i32,
}

fn main() {
    let response = LogResponse {
        id: 1,
        message: "started".to_string(),
        level: 1,
    };
    assert_eq!(response.level, 1);

    let insertable = InsertableLog {
        message: "started".to_string(),
        level: 1,
    };
    assert_eq!(insertable.message, "started");
}
