// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use itemstore_core::{Entity, Schema};

#[derive(Debug, Clone, Entity)]
#[entity(table = "items")]
pub struct Item {
    #[id]
    pub id: i64,

    #[field(create, response)]
    #[column(index)]
    pub name: String,

    #[field(create, response)]
    pub description: String,
}

fn main() {
    let create = CreateItemRequest {
        name: "lamp".to_string(),
        description: "desk lamp".to_string(),
    };
    let insertable = InsertableItem::from(create);
    assert_eq!(insertable.name, "lamp");

    let item = Item::from(ItemRow {
        id: 1,
        name: insertable.name,
        description: insertable.description,
    });
    let response = ItemResponse::from(&item);
    assert_eq!(response.id, 1);
    assert_eq!(response.description, "desk lamp");

    let borrowed = InsertableItem::from(&item);
    assert_eq!(borrowed.name, "lamp");
    let owned = InsertableItem::from(item);
    assert_eq!(owned.description, "desk lamp");

    assert_eq!(Item::TABLE, "items");
}
