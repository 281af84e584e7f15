//! HTTP route handlers for the dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (store reachable)
//!
//! # Auth
//! GET  /                       - Login page
//! POST /                       - Login action
//! POST /logout                 - Logout
//!
//! # Sales (Admin role only)
//! GET  /dashboard?page=<n>     - Paginated sales listing
//! ```

pub mod auth;
pub mod dashboard;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the full application router (without middleware layers).
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(dashboard::router())
}
