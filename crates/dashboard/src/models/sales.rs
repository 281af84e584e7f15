//! Sales listing results.

use std::time::Duration;

use sales_dashboard_core::{PageNumber, SalesRecord};

/// One page of the sales listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// Rows on this page, ordered by sale ID; at most `PAGE_SIZE`.
    pub rows: Vec<SalesRecord>,
    /// The page that was requested (after clamping).
    pub page_number: PageNumber,
    /// Total number of pages for the current row count.
    pub total_pages: i64,
    /// Total number of sales rows.
    pub total_rows: i64,
    /// Wall-clock time spent on the window read and the count.
    pub elapsed: Duration,
}

impl PageResult {
    /// Previous page, if there is one.
    #[must_use]
    pub const fn previous_page(&self) -> Option<PageNumber> {
        self.page_number.previous()
    }

    /// Next page, if it exists.
    #[must_use]
    pub const fn next_page(&self) -> Option<PageNumber> {
        self.page_number.next_within(self.total_pages)
    }
}
