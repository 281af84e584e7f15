//! Sales table queries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection, PgPool};

use sales_dashboard_core::{PageWindow, SaleId, SalesRecord};

use super::RepositoryError;

/// Raw `sales_data` row.
#[derive(Debug, FromRow)]
struct SalesRow {
    sale_id: SaleId,
    product_name: String,
    sale_date: NaiveDate,
    amount: Decimal,
}

impl From<SalesRow> for SalesRecord {
    fn from(row: SalesRow) -> Self {
        Self {
            sale_id: row.sale_id,
            product_name: row.product_name,
            sale_date: row.sale_date,
            amount: row.amount,
        }
    }
}

/// Fetch one window of sales rows ordered by `sale_id` ascending.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn fetch_window(
    conn: &mut PgConnection,
    window: PageWindow,
) -> Result<Vec<SalesRecord>, RepositoryError> {
    let rows = sqlx::query_as::<_, SalesRow>(
        r"
        SELECT sale_id, product_name, sale_date, amount
        FROM sales_data
        ORDER BY sale_id
        OFFSET $1 ROWS
        FETCH NEXT $2 ROWS ONLY
        ",
    )
    .bind(window.offset)
    .bind(window.limit)
    .fetch_all(conn)
    .await?;

    Ok(rows.into_iter().map(SalesRecord::from).collect())
}

/// Count all sales rows.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn count_all(conn: &mut PgConnection) -> Result<i64, RepositoryError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sales_data")
        .fetch_one(conn)
        .await?;

    Ok(count)
}

/// Insert sales rows in a single transaction.
///
/// Returns the number of rows inserted. Existing sale IDs are left untouched.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if any insert fails.
pub async fn insert_sales(pool: &PgPool, records: &[SalesRecord]) -> Result<u64, RepositoryError> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for record in records {
        let result = sqlx::query(
            r"
            INSERT INTO sales_data (sale_id, product_name, sale_date, amount)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (sale_id) DO NOTHING
            ",
        )
        .bind(record.sale_id)
        .bind(&record.product_name)
        .bind(record.sale_date)
        .bind(record.amount)
        .execute(&mut *tx)
        .await?;
        inserted += result.rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}

/// Highest sale ID currently stored, if any.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn max_sale_id(pool: &PgPool) -> Result<Option<SaleId>, RepositoryError> {
    let max = sqlx::query_scalar::<_, Option<SaleId>>("SELECT MAX(sale_id) FROM sales_data")
        .fetch_one(pool)
        .await?;

    Ok(max)
}
