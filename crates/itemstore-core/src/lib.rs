// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for itemstore.
//!
//! This crate provides the traits that `#[derive(Entity)]` generated code
//! implements, re-exports the derive itself, and owns the SQLite session
//! provider.
//!
//! # Overview
//!
//! - [`Repository`]: Base trait for all generated repository traits
//! - [`Schema`]: Table name and DDL of an entity
//! - [`Store`] / [`Session`]: Connection pool and per-operation session guard
//! - [`prelude`]: Convenient re-exports
//!
//! # Usage
//!
//! ```rust,ignore
//! use itemstore_core::prelude::*;
//!
//! #[derive(Debug, Clone, Entity)]
//! #[entity(table = "items")]
//! pub struct Item {
//!     #[id]
//!     pub id: i64,
//!     #[field(create, response)]
//!     pub name: String,
//! }
//!
//! let store = Store::connect("sqlite://items.db").await?;
//! store.bootstrap::<Item>().await?;
//!
//! let mut session = store.session().await?;
//! let item = session.create(CreateItemRequest { name: "a".into() }).await?;
//! session.release();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod prelude;
#[cfg(feature = "sqlite")]
pub mod session;

/// Re-export async_trait for generated code.
pub use async_trait::async_trait;
#[cfg(feature = "derive")]
pub use itemstore_derive::Entity;
#[cfg(feature = "sqlite")]
pub use session::{Session, Store, StoreError};

/// Base repository trait.
///
/// Every generated `{Entity}Repository` trait extends this one, so a backend
/// declares its error type once and implements any number of entity
/// repositories on top.
///
/// ```rust,ignore
/// #[async_trait]
/// pub trait ItemRepository: Repository {
///     async fn create(&mut self, dto: CreateItemRequest) -> Result<Item, Self::Error>;
///     async fn find_by_id(&mut self, id: i64) -> Result<Option<Item>, Self::Error>;
///     async fn list(&mut self) -> Result<Vec<Item>, Self::Error>;
/// }
/// ```
pub trait Repository: Send {
    /// Error type for repository operations.
    type Error: std::error::Error + Send + Sync + 'static;
}

#[cfg(feature = "sqlite")]
impl Repository for sqlx::SqliteConnection {
    type Error = sqlx::Error;
}

/// Table name and schema DDL of an entity.
///
/// Implemented by `#[derive(Entity)]`. All statements in
/// [`MIGRATION_UP`](Schema::MIGRATION_UP) are idempotent (`IF NOT EXISTS`), so
/// applying it on every start preserves existing data.
pub trait Schema {
    /// Database table name.
    const TABLE: &'static str;

    /// DDL creating the table and its indexes.
    const MIGRATION_UP: &'static str;

    /// DDL dropping the table.
    const MIGRATION_DOWN: &'static str;
}
