//! Offset pagination for the sales listing.
//!
//! The page size is fixed and never supplied by the caller. A page number maps
//! to a `[offset, offset + PAGE_SIZE)` window over rows ordered by sale ID,
//! and the page count is derived from a separate total row count.
//!
//! Page numbers below 1 are clamped to 1 instead of producing a negative
//! offset, and unparsable values fall back to the first page.

use serde::Serialize;

/// Number of rows on every page.
pub const PAGE_SIZE: i64 = 100;

/// A 1-based page number.
///
/// Always `>= 1`; construction clamps smaller values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PageNumber(i64);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Create a page number, clamping anything below 1 to 1.
    #[must_use]
    pub const fn new(page: i64) -> Self {
        if page < 1 { Self::FIRST } else { Self(page) }
    }

    /// Parse the raw `page` query parameter.
    ///
    /// A missing, empty or non-integer value yields the first page.
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<i64>().ok())
            .map_or(Self::FIRST, Self::new)
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// The preceding page, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        if self.0 > 1 { Some(Self(self.0 - 1)) } else { None }
    }

    /// The following page, if it does not exceed `total_pages`.
    #[must_use]
    pub const fn next_within(self, total_pages: i64) -> Option<Self> {
        if self.0 < total_pages {
            Some(Self(self.0 + 1))
        } else {
            None
        }
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for PageNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Row window for a windowed read: skip `offset` rows, return at most `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    /// Number of leading rows to skip.
    pub offset: i64,
    /// Maximum number of rows to return.
    pub limit: i64,
}

impl PageWindow {
    /// Window for `page`: `offset = (page - 1) * PAGE_SIZE`, `limit = PAGE_SIZE`.
    ///
    /// The offset saturates instead of overflowing for absurd page numbers,
    /// which simply yields an empty page.
    #[must_use]
    pub const fn for_page(page: PageNumber) -> Self {
        Self {
            offset: (page.get() - 1).saturating_mul(PAGE_SIZE),
            limit: PAGE_SIZE,
        }
    }
}

/// Number of pages needed to show `total_rows` rows.
///
/// `floor(total_rows / PAGE_SIZE)` plus one for a partial trailing page.
/// Zero rows means zero pages.
#[must_use]
pub const fn total_pages(total_rows: i64) -> i64 {
    if total_rows <= 0 {
        return 0;
    }
    let full = total_rows / PAGE_SIZE;
    if total_rows % PAGE_SIZE > 0 {
        full + 1
    } else {
        full
    }
}
