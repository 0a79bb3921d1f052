// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generated items inherit the entity's visibility.

mod inner {
    use itemstore_core::Entity;

    #[derive(Debug, Clone, Entity)]
    #[entity(table = "tags")]
    pub(crate) struct Tag {
        #[id]
        pub(crate) id: i64,

        #[field(create, response)]
        pub(crate) label: String,
    }
}

fn main() {
    let create = inner::CreateTagRequest {
        label: "rust".to_string(),
    };
    let insertable = inner::InsertableTag::from(create);
    assert_eq!(insertable.label, "rust");
}
