// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Derived entities driven against a real SQLite file.

use std::time::Duration;

use itemstore_core::prelude::*;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq, Entity)]
#[entity(table = "notes")]
pub struct Note {
    #[id]
    pub id: i64,

    #[field(create, response)]
    #[column(index)]
    pub title: String,

    #[field(create, response)]
    #[column(name = "note_body")]
    pub body: Option<String>,

    #[field(skip)]
    pub revision: i32
}

async fn store(dir: &TempDir) -> Store {
    let url = format!("sqlite://{}", dir.path().join("notes.db").display());
    let store = Store::connect(&url).await.unwrap();
    store.bootstrap::<Note>().await.unwrap();
    store
}

fn note(title: &str, body: Option<&str>) -> CreateNoteRequest {
    CreateNoteRequest {
        title: title.to_string(),
        body:  body.map(str::to_string)
    }
}

#[tokio::test]
async fn create_assigns_increasing_ids() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir).await;
    let mut session = store.session().await.unwrap();

    let first = session.create(note("first", Some("a"))).await.unwrap();
    let second = session.create(note("second", None)).await.unwrap();
    session.release();

    assert!(first.id > 0);
    assert!(second.id > first.id);
    assert_eq!(first.title, "first");
    assert_eq!(first.body.as_deref(), Some("a"));
    assert_eq!(second.body, None);
    assert_eq!(first.revision, 0);
}

#[tokio::test]
async fn find_by_id_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir).await;
    let mut session = store.session().await.unwrap();

    let created = session.create(note("hello", Some("world"))).await.unwrap();
    let found = session.find_by_id(created.id).await.unwrap();
    let missing = session.find_by_id(created.id + 100).await.unwrap();

    assert_eq!(found, Some(created));
    assert_eq!(missing, None);
}

#[tokio::test]
async fn list_is_ordered_by_id() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir).await;
    let mut session = store.session().await.unwrap();

    assert!(session.list().await.unwrap().is_empty());

    for title in ["c", "a", "b"] {
        session.create(note(title, None)).await.unwrap();
    }

    let titles: Vec<String> = session
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert_eq!(titles, ["c", "a", "b"]);
}

#[tokio::test]
async fn response_hides_skipped_fields() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir).await;
    let mut session = store.session().await.unwrap();

    let created = session.create(note("t", None)).await.unwrap();
    let response = NoteResponse::from(&created);

    assert_eq!(response.id, created.id);
    assert_eq!(response.title, "t");
}

#[tokio::test]
async fn bootstrap_is_idempotent_and_keeps_rows() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir).await;

    let mut session = store.session().await.unwrap();
    session.create(note("kept", None)).await.unwrap();
    session.release();

    store.bootstrap::<Note>().await.unwrap();

    let mut session = store.session().await.unwrap();
    assert_eq!(session.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn data_survives_reopen() {
    let dir = TempDir::new().unwrap();

    let first = store(&dir).await;
    let mut session = first.session().await.unwrap();
    let created = session.create(note("durable", None)).await.unwrap();
    session.release();
    first.close().await;

    let second = store(&dir).await;
    let mut session = second.session().await.unwrap();
    assert_eq!(session.find_by_id(created.id).await.unwrap(), Some(created));
}

#[test]
fn schema_constants() {
    assert_eq!(Note::TABLE, "notes");
    assert!(Note::MIGRATION_UP.contains("id INTEGER PRIMARY KEY AUTOINCREMENT"));
    assert!(Note::MIGRATION_UP.contains("note_body TEXT,"));
    assert!(Note::MIGRATION_UP.contains("CREATE INDEX IF NOT EXISTS idx_notes_title"));
    assert_eq!(Note::MIGRATION_DOWN, "DROP TABLE IF EXISTS notes;\n");
}

#[tokio::test]
async fn dropped_session_returns_connection() {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("one.db").display());
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(2))
        .connect_with(
            url.parse::<SqliteConnectOptions>()
                .unwrap()
                .create_if_missing(true)
        )
        .await
        .unwrap();
    let store = Store::from_pool(pool);
    store.bootstrap::<Note>().await.unwrap();

    {
        let mut session = store.session().await.unwrap();
        let _ = session.find_by_id(1).await.unwrap();
    }

    let session = tokio::time::timeout(Duration::from_secs(5), store.session())
        .await
        .expect("session not returned to pool")
        .unwrap();
    session.release();

    let session = tokio::time::timeout(Duration::from_secs(5), store.session())
        .await
        .expect("released session not returned to pool");
    assert!(session.is_ok());
}
