//! Sale identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// `sales_data.sale_id` primary key.
///
/// Listings are ranked by this value, so it is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type), sqlx(transparent))]
#[serde(transparent)]
pub struct SaleId(i32);

impl SaleId {
    /// Create a sale ID from its stored value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the stored value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// The ID following this one, or `None` once the ID space is exhausted.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl fmt::Display for SaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
