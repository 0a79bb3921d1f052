// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! DDL generation for SQLite.
//!
//! Generates CREATE TABLE, CREATE INDEX and DROP TABLE statements.

use super::types::{SqliteTypeMapper, TypeMapper};
use crate::entity::parse::{EntityDef, FieldDef};

/// Generate the complete UP migration SQL.
///
/// CREATE TABLE first, then one CREATE INDEX per `#[column(index)]` field.
pub fn generate_up(entity: &EntityDef) -> String {
    let mut sql = generate_create_table(entity);

    for field in entity.all_fields() {
        if field.column().has_index() {
            sql.push_str(&generate_single_index(entity, field));
        }
    }

    sql
}

/// Generate the DOWN migration SQL.
pub fn generate_down(entity: &EntityDef) -> String {
    format!("DROP TABLE IF EXISTS {};\n", entity.table)
}

fn generate_create_table(entity: &EntityDef) -> String {
    let mapper = SqliteTypeMapper;

    let columns: Vec<String> = entity
        .all_fields()
        .iter()
        .map(|f| generate_column_def(f, &mapper))
        .collect();

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n{}\n);\n",
        entity.table,
        columns.join(",\n")
    )
}

fn generate_column_def(field: &FieldDef, mapper: &SqliteTypeMapper) -> String {
    let mut parts = vec![format!("    {}", field.column_name())];

    // AUTOINCREMENT keeps ids of deleted rows from being handed out again.
    if field.is_id() {
        parts.push("INTEGER PRIMARY KEY AUTOINCREMENT".to_string());
        return parts.join(" ");
    }

    let sql_type = mapper.map_type(field.ty());
    parts.push(sql_type.name.to_string());
    if !sql_type.nullable {
        parts.push("NOT NULL".to_string());
    }
    if field.column().unique {
        parts.push("UNIQUE".to_string());
    }

    parts.join(" ")
}

fn generate_single_index(entity: &EntityDef, field: &FieldDef) -> String {
    let column = field.column_name();
    format!(
        "CREATE INDEX IF NOT EXISTS idx_{table}_{column} ON {table} ({column});\n",
        table = entity.table
    )
}
