//! Seed the database with synthetic sales rows.
//!
//! New rows continue after the current highest sale ID, so the command can be
//! run repeatedly to grow the table for pagination testing.

use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use rust_decimal::Decimal;

use sales_dashboard::db::sales as sales_db;
use sales_dashboard_core::{SaleId, SalesRecord};

use super::{CommandError, connect};

const PRODUCTS: &[&str] = &[
    "Standing Desk",
    "Ergonomic Chair",
    "Monitor Arm",
    "Mechanical Keyboard",
    "Wireless Mouse",
    "USB-C Dock",
    "Desk Lamp",
    "Noise-Cancelling Headphones",
    "Webcam",
    "Cable Tray",
];

/// Days back from today that generated sale dates may fall on.
const DATE_SPAN_DAYS: i64 = 365;

/// Insert `count` synthetic sales rows.
///
/// # Errors
///
/// Returns `CommandError` if the ID range would overflow or a database
/// operation fails.
pub async fn sales(count: u32) -> Result<(), CommandError> {
    let pool = connect().await?;

    let start = first_new_id(sales_db::max_sale_id(&pool).await?)?;

    let records = generate(start, count, Utc::now().date_naive())?;
    tracing::info!(count, first_id = start, "Seeding sales rows");

    let inserted = sales_db::insert_sales(&pool, &records).await?;
    tracing::info!(inserted, "Seeding complete");

    Ok(())
}

/// First ID to use after the current highest stored ID.
fn first_new_id(max: Option<SaleId>) -> Result<i32, CommandError> {
    match max {
        None => Ok(1),
        Some(id) => id.next().map(SaleId::as_i32).ok_or_else(|| {
            CommandError::InvalidArgument("sale ID space exhausted".to_string())
        }),
    }
}

/// Generate `count` records with consecutive IDs starting at `start`.
fn generate(start: i32, count: u32, today: NaiveDate) -> Result<Vec<SalesRecord>, CommandError> {
    let count = i32::try_from(count)
        .map_err(|_| CommandError::InvalidArgument(format!("count {count} is too large")))?;
    let end = start
        .checked_add(count)
        .ok_or_else(|| CommandError::InvalidArgument("sale ID range overflows".to_string()))?;

    let mut rng = rand::rng();
    let records = (start..end)
        .map(|id| {
            let product = PRODUCTS.choose(&mut rng).copied().unwrap_or("Widget");
            let days_ago = rng.random_range(0..DATE_SPAN_DAYS);
            let cents = rng.random_range(100..100_000_i64);
            SalesRecord {
                sale_id: SaleId::new(id),
                product_name: product.to_string(),
                sale_date: today - Duration::days(days_ago),
                amount: Decimal::new(cents, 2),
            }
        })
        .collect();

    Ok(records)
}
