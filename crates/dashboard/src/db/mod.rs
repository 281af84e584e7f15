//! Database access for the dashboard `PostgreSQL` store.
//!
//! # Tables
//!
//! - `users` - Credentials (`username`, `password`, `role`), read-only here
//! - `sales_data` - Sales records listed by the dashboard, read-only here
//! - `tower_sessions.session` - Session storage (owned by tower-sessions)
//!
//! # Migrations
//!
//! Migrations are stored in `crates/dashboard/migrations/` and run via:
//! ```bash
//! cargo run -p sales-dashboard-cli -- migrate
//! ```
//!
//! # Connection scoping
//!
//! Handlers never touch the pool directly. They go through [`RecordStore`],
//! which hands out one [`StoreConnection`] per request. The connection is
//! returned to the pool when the boxed guard is dropped, so every exit path
//! (including `?` on a failed query) releases it.

pub mod sales;
pub mod users;

#[cfg(test)]
pub mod memory;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};
use thiserror::Error;

use sales_dashboard_core::{PageWindow, Role, SalesRecord};

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Constraint violation (e.g., duplicate username).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Source of per-request store connections.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Acquire a connection scoped to the current request.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if no connection can be obtained.
    async fn acquire(&self) -> Result<Box<dyn StoreConnection>, RepositoryError>;
}

/// A single acquired connection. Dropping it releases the connection.
#[async_trait]
pub trait StoreConnection: Send {
    /// Look up the role for an exact `(username, password)` match.
    async fn find_role(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<Option<Role>, RepositoryError>;

    /// Read the rows ranked `[offset, offset + limit)` by ascending sale ID.
    async fn fetch_sales_window(
        &mut self,
        window: PageWindow,
    ) -> Result<Vec<SalesRecord>, RepositoryError>;

    /// Count every row of the sales table.
    async fn count_sales(&mut self) -> Result<i64, RepositoryError>;
}

/// `PostgreSQL`-backed record store.
#[derive(Debug, Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    /// Create a store over an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn acquire(&self) -> Result<Box<dyn StoreConnection>, RepositoryError> {
        let conn = self.pool.acquire().await?;
        Ok(Box::new(PgStoreConnection { conn }))
    }
}

/// Pooled `PostgreSQL` connection; returned to the pool on drop.
struct PgStoreConnection {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl StoreConnection for PgStoreConnection {
    async fn find_role(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<Option<Role>, RepositoryError> {
        users::find_role(&mut self.conn, username, password).await
    }

    async fn fetch_sales_window(
        &mut self,
        window: PageWindow,
    ) -> Result<Vec<SalesRecord>, RepositoryError> {
        sales::fetch_window(&mut self.conn, window).await
    }

    async fn count_sales(&mut self) -> Result<i64, RepositoryError> {
        sales::count_all(&mut self.conn).await
    }
}

/// Create a `PostgreSQL` connection pool.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(
    database_url: &secrecy::SecretString,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
