// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use itemstore_core::{Entity, Schema};

#[derive(Debug, Clone, Entity)]
#[entity(table = "accounts")]
pub struct Account {
    #[id]
    #[column(name = "account_id")]
    pub id: i64,

    #[field(create, response)]
    #[column(unique, index)]
    pub email: String,

    #[field(create)]
    pub password_hash: String,

    #[field(response)]
    pub nickname: Option<String>,

    #[field(skip)]
    pub login_count: i64,

    #[field(create, response)]
    pub active: bool,

    #[field(response)]
    pub balance: f64,

    #[field(skip)]
    pub avatar: Option<Vec<u8>>,
}

fn main() {
    let create = CreateAccountRequest {
        email: "a@example.com".to_string(),
        password_hash: "hash".to_string(),
        active: true,
    };
    let insertable = InsertableAccount::from(create);
    assert_eq!(insertable.login_count, 0);
    assert!(insertable.nickname.is_none());
    assert!(insertable.active);

    assert!(Account::MIGRATION_UP.contains("account_id INTEGER PRIMARY KEY AUTOINCREMENT"));
    assert!(Account::MIGRATION_UP.contains("email TEXT NOT NULL UNIQUE"));
    assert!(Account::MIGRATION_UP.contains("avatar BLOB"));
    assert_eq!(Account::MIGRATION_DOWN, "DROP TABLE IF EXISTS accounts;\n");
}
