//! In-memory record store for tests.
//!
//! Tracks how many connections were acquired and how many are still open so
//! tests can assert that every request releases its connection.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use sales_dashboard_core::{PageWindow, Role, SalesRecord};

use super::{RecordStore, RepositoryError, StoreConnection};

/// Which store operation should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePoint {
    /// Connection acquisition.
    Acquire,
    /// Credential lookup.
    CredentialLookup,
    /// Windowed sales read.
    SalesWindow,
    /// Sales row count.
    SalesCount,
}

/// Connection bookkeeping shared by a store and its connections.
#[derive(Debug, Default)]
pub struct ConnectionStats {
    acquired: AtomicUsize,
    open: AtomicUsize,
}

impl ConnectionStats {
    /// Total connections handed out.
    #[must_use]
    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    /// Connections not yet released.
    #[must_use]
    pub fn open(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }
}

/// Record store backed by in-process collections.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    users: Arc<HashMap<String, (String, String)>>,
    sales: Arc<Vec<SalesRecord>>,
    failure: Option<FailurePoint>,
    stats: Arc<ConnectionStats>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a credential row with a stored role value.
    #[must_use]
    pub fn with_user(mut self, username: &str, password: &str, role: &str) -> Self {
        Arc::make_mut(&mut self.users).insert(
            username.to_string(),
            (password.to_string(), role.to_string()),
        );
        self
    }

    /// Replace the sales rows. Rows are kept sorted by sale ID.
    #[must_use]
    pub fn with_sales(mut self, mut sales: Vec<SalesRecord>) -> Self {
        sales.sort_by_key(|record| record.sale_id);
        self.sales = Arc::new(sales);
        self
    }

    /// Make the given operation fail.
    #[must_use]
    pub fn failing_at(mut self, point: FailurePoint) -> Self {
        self.failure = Some(point);
        self
    }

    /// Shared connection counters.
    #[must_use]
    pub fn stats(&self) -> Arc<ConnectionStats> {
        Arc::clone(&self.stats)
    }

    fn fails_at(&self, point: FailurePoint) -> bool {
        self.failure == Some(point)
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn acquire(&self) -> Result<Box<dyn StoreConnection>, RepositoryError> {
        if self.fails_at(FailurePoint::Acquire) {
            return Err(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        self.stats.acquired.fetch_add(1, Ordering::SeqCst);
        self.stats.open.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemoryConnection {
            store: self.clone(),
        }))
    }
}

/// Connection handed out by [`MemoryRecordStore`].
struct MemoryConnection {
    store: MemoryRecordStore,
}

impl MemoryConnection {
    fn check(&self, point: FailurePoint) -> Result<(), RepositoryError> {
        if self.store.fails_at(point) {
            return Err(RepositoryError::Database(sqlx::Error::Protocol(format!(
                "injected failure at {point:?}"
            ))));
        }
        Ok(())
    }
}

impl Drop for MemoryConnection {
    fn drop(&mut self) {
        self.store.stats.open.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl StoreConnection for MemoryConnection {
    async fn find_role(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<Option<Role>, RepositoryError> {
        self.check(FailurePoint::CredentialLookup)?;
        Ok(self
            .store
            .users
            .get(username)
            .filter(|(stored, _)| stored == password)
            .map(|(_, role)| Role::from_stored(role)))
    }

    async fn fetch_sales_window(
        &mut self,
        window: PageWindow,
    ) -> Result<Vec<SalesRecord>, RepositoryError> {
        self.check(FailurePoint::SalesWindow)?;
        let offset = usize::try_from(window.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(window.limit).unwrap_or(0);
        Ok(self
            .store
            .sales
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count_sales(&mut self) -> Result<i64, RepositoryError> {
        self.check(FailurePoint::SalesCount)?;
        Ok(i64::try_from(self.store.sales.len()).unwrap_or(i64::MAX))
    }
}
