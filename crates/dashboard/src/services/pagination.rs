//! Role-gated sales listing.
//!
//! The caller's session identity is passed in explicitly. Authorization is
//! checked before any store access, and each listing uses exactly one
//! connection that is released when the call returns.

use std::time::Instant;

use thiserror::Error;

use sales_dashboard_core::{PageNumber, PageWindow, total_pages};

use crate::db::{RecordStore, RepositoryError};
use crate::models::{CurrentUser, PageResult};

/// Errors that can occur while listing a page.
#[derive(Debug, Error)]
pub enum ListingError {
    /// No session identity was supplied.
    #[error("not logged in")]
    Unauthenticated,

    /// The session identity is not an admin.
    #[error("access denied: admin only")]
    AccessDenied,

    /// The window read or the count failed.
    #[error("query failed: {0}")]
    Store(#[from] RepositoryError),
}

/// Sales listing service.
pub struct Paginator<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> Paginator<'a> {
    /// Create a paginator over a record store.
    #[must_use]
    pub const fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// List one page of sales for the given session identity.
    ///
    /// # Errors
    ///
    /// Returns `ListingError::Unauthenticated` if `user` is `None` and
    /// `ListingError::AccessDenied` if the user is not an admin; neither
    /// touches the store. Returns `ListingError::Store` if either read fails.
    pub async fn list_page(
        &self,
        user: Option<&CurrentUser>,
        page: PageNumber,
    ) -> Result<PageResult, ListingError> {
        let user = user.ok_or(ListingError::Unauthenticated)?;
        if !user.is_admin() {
            tracing::warn!(username = %user.username, role = %user.role, "Sales listing denied");
            return Err(ListingError::AccessDenied);
        }

        let window = PageWindow::for_page(page);
        let mut conn = self.store.acquire().await?;

        let started = Instant::now();
        let rows = conn.fetch_sales_window(window).await?;
        let total_rows = conn.count_sales().await?;
        let elapsed = started.elapsed();
        drop(conn);

        tracing::debug!(
            page = page.get(),
            rows = rows.len(),
            total_rows,
            elapsed = ?elapsed,
            "Sales page listed"
        );

        Ok(PageResult {
            rows,
            page_number: page,
            total_pages: total_pages(total_rows),
            total_rows,
            elapsed,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use sales_dashboard_core::{PAGE_SIZE, Role, SaleId, SalesRecord};

    use super::*;
    use crate::db::memory::{FailurePoint, MemoryRecordStore};

    fn sales(count: i32) -> Vec<SalesRecord> {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (1..=count)
            .map(|id| SalesRecord {
                sale_id: SaleId::new(id),
                product_name: format!("Product {id}"),
                sale_date: date,
                amount: Decimal::new(i64::from(id) * 100, 2),
            })
            .collect()
    }

    fn admin() -> CurrentUser {
        CurrentUser::new("alice", Role::Admin)
    }

    fn viewer() -> CurrentUser {
        CurrentUser::new("bob", Role::Other)
    }

    #[tokio::test]
    async fn test_empty_store_yields_empty_page() {
        let store = MemoryRecordStore::new();
        let page = Paginator::new(&store)
            .list_page(Some(&admin()), PageNumber::FIRST)
            .await
            .unwrap();

        assert!(page.rows.is_empty());
        assert_eq!(page.total_rows, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.next_page(), None);
        assert_eq!(page.previous_page(), None);
    }

    #[tokio::test]
    async fn test_partial_last_page() {
        let store = MemoryRecordStore::new().with_sales(sales(150));
        let page = Paginator::new(&store)
            .list_page(Some(&admin()), PageNumber::new(2))
            .await
            .unwrap();

        assert_eq!(page.rows.len(), 50);
        assert_eq!(page.rows[0].sale_id, SaleId::new(101));
        assert_eq!(page.rows[49].sale_id, SaleId::new(150));
        assert_eq!(page.total_rows, 150);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.previous_page(), Some(PageNumber::FIRST));
        assert_eq!(page.next_page(), None);
    }

    #[tokio::test]
    async fn test_full_page_is_capped() {
        let store = MemoryRecordStore::new().with_sales(sales(250));
        let paginator = Paginator::new(&store);

        for n in 1..=3 {
            let page = paginator
                .list_page(Some(&admin()), PageNumber::new(n))
                .await
                .unwrap();
            assert!(page.rows.len() <= usize::try_from(PAGE_SIZE).unwrap());
            assert_eq!(page.total_pages, 3);
        }
    }

    #[tokio::test]
    async fn test_rows_follow_sale_id_rank() {
        let mut shuffled = sales(120);
        shuffled.reverse();
        let store = MemoryRecordStore::new().with_sales(shuffled);

        let page = Paginator::new(&store)
            .list_page(Some(&admin()), PageNumber::FIRST)
            .await
            .unwrap();

        let ids: Vec<i32> = page.rows.iter().map(|r| r.sale_id.as_i32()).collect();
        let expected: Vec<i32> = (1..=100).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty() {
        let store = MemoryRecordStore::new().with_sales(sales(100));
        let page = Paginator::new(&store)
            .list_page(Some(&admin()), PageNumber::new(5))
            .await
            .unwrap();

        assert!(page.rows.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_listing_is_idempotent() {
        let store = MemoryRecordStore::new().with_sales(sales(230));
        let paginator = Paginator::new(&store);

        let first = paginator
            .list_page(Some(&admin()), PageNumber::new(2))
            .await
            .unwrap();
        let second = paginator
            .list_page(Some(&admin()), PageNumber::new(2))
            .await
            .unwrap();

        assert_eq!(first.rows, second.rows);
        assert_eq!(first.total_pages, second.total_pages);
        assert_eq!(first.total_rows, second.total_rows);
    }

    #[tokio::test]
    async fn test_no_session_never_touches_store() {
        let store = MemoryRecordStore::new().with_sales(sales(10));
        let stats = store.stats();

        let err = Paginator::new(&store)
            .list_page(None, PageNumber::FIRST)
            .await
            .unwrap_err();

        assert!(matches!(err, ListingError::Unauthenticated));
        assert_eq!(stats.acquired(), 0);
    }

    #[tokio::test]
    async fn test_non_admin_denied_on_every_page() {
        let store = MemoryRecordStore::new().with_sales(sales(300));
        let stats = store.stats();
        let paginator = Paginator::new(&store);

        for n in [-1, 0, 1, 2, 3, 1000] {
            let err = paginator
                .list_page(Some(&viewer()), PageNumber::new(n))
                .await
                .unwrap_err();
            assert!(matches!(err, ListingError::AccessDenied));
        }
        assert_eq!(stats.acquired(), 0);
    }

    #[tokio::test]
    async fn test_window_failure_releases_connection() {
        let store = MemoryRecordStore::new()
            .with_sales(sales(10))
            .failing_at(FailurePoint::SalesWindow);
        let stats = store.stats();

        let err = Paginator::new(&store)
            .list_page(Some(&admin()), PageNumber::FIRST)
            .await
            .unwrap_err();

        assert!(matches!(err, ListingError::Store(_)));
        assert_eq!(stats.acquired(), 1);
        assert_eq!(stats.open(), 0);
    }

    #[tokio::test]
    async fn test_count_failure_releases_connection() {
        let store = MemoryRecordStore::new()
            .with_sales(sales(10))
            .failing_at(FailurePoint::SalesCount);
        let stats = store.stats();

        let err = Paginator::new(&store)
            .list_page(Some(&admin()), PageNumber::FIRST)
            .await
            .unwrap_err();

        assert!(matches!(err, ListingError::Store(_)));
        assert_eq!(stats.open(), 0);
    }

    #[tokio::test]
    async fn test_acquire_failure_is_store_error() {
        let store = MemoryRecordStore::new().failing_at(FailurePoint::Acquire);

        let err = Paginator::new(&store)
            .list_page(Some(&admin()), PageNumber::FIRST)
            .await
            .unwrap_err();

        assert!(matches!(err, ListingError::Store(_)));
    }

    #[tokio::test]
    async fn test_success_uses_one_connection() {
        let store = MemoryRecordStore::new().with_sales(sales(10));
        let stats = store.stats();

        Paginator::new(&store)
            .list_page(Some(&admin()), PageNumber::FIRST)
            .await
            .unwrap();

        assert_eq!(stats.acquired(), 1);
        assert_eq!(stats.open(), 0);
    }
}
