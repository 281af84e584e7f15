//! Sales record type.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::SaleId;

/// A single row of the `sales_data` table.
///
/// Read-only from the dashboard's point of view; listings are always ordered
/// by `sale_id` ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Primary key, also the listing order.
    pub sale_id: SaleId,
    /// Name of the product sold.
    pub product_name: String,
    /// Calendar date of the sale.
    pub sale_date: NaiveDate,
    /// Sale amount.
    pub amount: Decimal,
}
