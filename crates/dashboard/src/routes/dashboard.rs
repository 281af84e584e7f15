//! Sales dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;

use sales_dashboard_core::{PageNumber, SalesRecord};

use crate::error::AppError;
use crate::middleware::OptionalAuth;
use crate::models::PageResult;
use crate::services::Paginator;
use crate::state::AppState;

/// Query parameters for the sales listing.
///
/// `page` is kept as raw text so a malformed value falls back to the first
/// page instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// Sales row view for templates.
#[derive(Debug, Clone)]
pub struct SaleRowView {
    pub sale_id: String,
    pub product_name: String,
    pub sale_date: String,
    pub amount: String,
}

impl From<&SalesRecord> for SaleRowView {
    fn from(record: &SalesRecord) -> Self {
        Self {
            sale_id: record.sale_id.to_string(),
            product_name: record.product_name.clone(),
            sale_date: record.sale_date.format("%Y-%m-%d").to_string(),
            amount: format!("{:.2}", record.amount),
        }
    }
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub username: String,
    pub rows: Vec<SaleRowView>,
    pub page: i64,
    pub total_pages: i64,
    pub total_rows: i64,
    pub query_time: String,
    pub prev_page: Option<i64>,
    pub next_page: Option<i64>,
}

impl DashboardTemplate {
    fn new(username: String, result: &PageResult) -> Self {
        Self {
            username,
            rows: result.rows.iter().map(SaleRowView::from).collect(),
            page: result.page_number.get(),
            total_pages: result.total_pages,
            total_rows: result.total_rows,
            query_time: format!("{:.3}", result.elapsed.as_secs_f64()),
            prev_page: result.previous_page().map(PageNumber::get),
            next_page: result.next_page().map(PageNumber::get),
        }
    }
}

/// Build the dashboard router.
pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(index))
}

/// Render one page of the sales listing.
///
/// GET /dashboard?page=<n>
async fn index(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Query(query): Query<PageQuery>,
) -> Result<DashboardTemplate, AppError> {
    let page = PageNumber::from_query(query.page.as_deref());
    let result = Paginator::new(state.store())
        .list_page(user.as_ref(), page)
        .await?;

    let username = user.map(|u| u.username).unwrap_or_default();
    Ok(DashboardTemplate::new(username, &result))
}
