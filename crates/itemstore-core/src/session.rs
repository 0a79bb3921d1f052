// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQLite session provider.
//!
//! - [`Store`]: Owns the connection pool and applies schema DDL
//! - [`Session`]: One pooled connection, held for a single operation
//! - [`StoreError`]: Error wrapper saying which step failed
//!
//! # Example
//!
//! ```rust,ignore
//! let store = Store::connect("sqlite://items.db").await?;
//! store.bootstrap::<Item>().await?;
//!
//! let mut session = store.session().await?;
//! let items = session.list().await?;
//! session.release();
//! ```
//!
//! # Release On Every Path
//!
//! A [`Session`] returns its connection to the pool when it is released or
//! dropped, so early returns through `?` never leak a connection.

use std::{
    error::Error as StdError,
    fmt,
    ops::{Deref, DerefMut},
    str::FromStr
};

use sqlx::{
    Sqlite, SqliteConnection, SqlitePool,
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions}
};

use crate::Schema;

/// Handle to the relational store.
///
/// Cheap to clone: clones share one pool.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool
}

impl Store {
    /// Open a pool for a SQLite URL such as `sqlite://items.db`.
    ///
    /// The database file is created if missing.
    ///
    /// # Errors
    ///
    /// [`StoreError::Connect`] when the URL is malformed or the file cannot be
    /// opened.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url).map_err(StoreError::Connect)?;
        Self::connect_with(options).await
    }

    /// Open a pool from prepared connect options.
    ///
    /// # Errors
    ///
    /// [`StoreError::Connect`] when the database cannot be opened.
    pub async fn connect_with(options: SqliteConnectOptions) -> Result<Self, StoreError> {
        let options = options
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);
        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(StoreError::Connect)?;
        Ok(Self::from_pool(pool))
    }

    /// Wrap an existing pool.
    #[must_use]
    pub const fn from_pool(pool: SqlitePool) -> Self {
        Self {
            pool
        }
    }

    /// Get reference to the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Apply the idempotent schema DDL of `E`.
    ///
    /// Safe to run on every start: an existing table keeps its rows.
    ///
    /// # Errors
    ///
    /// [`StoreError::Bootstrap`] when the DDL fails.
    pub async fn bootstrap<E: Schema>(&self) -> Result<(), StoreError> {
        sqlx::raw_sql(E::MIGRATION_UP)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Bootstrap)?;
        Ok(())
    }

    /// Acquire a session for one operation.
    ///
    /// # Errors
    ///
    /// [`StoreError::Acquire`] when no connection can be obtained.
    pub async fn session(&self) -> Result<Session, StoreError> {
        let conn = self.pool.acquire().await.map_err(StoreError::Acquire)?;
        Ok(Session {
            conn
        })
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// A pooled connection scoped to one operation.
///
/// Dereferences to [`SqliteConnection`], so generated repository methods are
/// called on it directly. Dropping the session returns the connection to the
/// pool.
#[derive(Debug)]
pub struct Session {
    conn: PoolConnection<Sqlite>
}

impl Session {
    /// Return the connection to the pool.
    pub fn release(self) {
        drop(self.conn);
    }
}

impl Deref for Session {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}

/// Error type for store operations.
///
/// Each variant names the step that failed and wraps the driver error.
#[derive(Debug)]
pub enum StoreError {
    /// Failed to open the database.
    Connect(sqlx::Error),

    /// Failed to acquire a pooled connection.
    Acquire(sqlx::Error),

    /// Failed to apply schema DDL.
    Bootstrap(sqlx::Error),

    /// A query inside a session failed.
    Query(sqlx::Error)
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect(e) => write!(f, "failed to open store: {e}"),
            Self::Acquire(e) => write!(f, "failed to acquire session: {e}"),
            Self::Bootstrap(e) => write!(f, "failed to apply schema: {e}"),
            Self::Query(e) => write!(f, "query failed: {e}")
        }
    }
}

impl StdError for StoreError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Connect(e) | Self::Acquire(e) | Self::Bootstrap(e) | Self::Query(e) => Some(e)
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Query(err)
    }
}

impl StoreError {
    /// Check if this is a connect error.
    pub const fn is_connect(&self) -> bool {
        matches!(self, Self::Connect(_))
    }

    /// Check if this is an acquire error.
    pub const fn is_acquire(&self) -> bool {
        matches!(self, Self::Acquire(_))
    }

    /// Check if this is a bootstrap error.
    pub const fn is_bootstrap(&self) -> bool {
        matches!(self, Self::Bootstrap(_))
    }

    /// Check if this is a query error.
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }

    /// Get the inner driver error.
    pub fn into_inner(self) -> sqlx::Error {
        match self {
            Self::Connect(e) | Self::Acquire(e) | Self::Bootstrap(e) | Self::Query(e) => e
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_step() {
        let err = StoreError::Acquire(sqlx::Error::PoolTimedOut);
        assert!(err.to_string().starts_with("failed to acquire session"));

        let err = StoreError::Bootstrap(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("failed to apply schema"));
    }

    #[test]
    fn predicates() {
        assert!(StoreError::Connect(sqlx::Error::PoolClosed).is_connect());
        assert!(StoreError::Acquire(sqlx::Error::PoolTimedOut).is_acquire());
        assert!(StoreError::Bootstrap(sqlx::Error::RowNotFound).is_bootstrap());
        assert!(!StoreError::Bootstrap(sqlx::Error::RowNotFound).is_query());
    }

    #[test]
    fn driver_errors_become_query_errors() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(err.is_query());
        assert!(err.source().is_some());
        assert!(matches!(err.into_inner(), sqlx::Error::RowNotFound));
    }

    #[tokio::test]
    async fn bootstrap_creates_table_in_pool() {
        let dir = tempfile::TempDir::new().unwrap();
        let url = format!("sqlite://{}", dir.path().join("pool.db").display());
        let store = Store::connect(&url).await.unwrap();

        struct Tag;
        impl Schema for Tag {
            const TABLE: &'static str = "tags";
            const MIGRATION_UP: &'static str =
                "CREATE TABLE IF NOT EXISTS tags (id INTEGER PRIMARY KEY AUTOINCREMENT);\n";
            const MIGRATION_DOWN: &'static str = "DROP TABLE IF EXISTS tags;\n";
        }

        store.bootstrap::<Tag>().await.unwrap();

        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")
                .bind(Tag::TABLE)
                .fetch_one(store.pool())
                .await
                .unwrap();
        assert_eq!(count, 1);
        store.close().await;
    }

    #[tokio::test]
    async fn unopenable_path_is_connect_error() {
        let err = Store::connect("sqlite:///missing-parent-dir/nested/items.db").await.unwrap_err();
        assert!(err.is_connect());
    }
}
