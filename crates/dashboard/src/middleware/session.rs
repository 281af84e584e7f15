//! Session middleware configuration for the dashboard.
//!
//! Sets up `PostgreSQL`-backed sessions using tower-sessions with
//! `SameSite=Strict` and an inactivity expiry taken from configuration.

use sqlx::PgPool;
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};
use tower_sessions_sqlx_store::PostgresStore;

use crate::config::DashboardConfig;

/// Session cookie name for the dashboard.
pub const SESSION_COOKIE_NAME: &str = "sales_dashboard_session";

/// Create the session layer with `PostgreSQL` store.
///
/// The session table lives in the store's default `tower_sessions` schema and
/// is created by `sd-cli migrate`.
#[must_use]
pub fn create_session_layer(
    pool: &PgPool,
    config: &DashboardConfig,
) -> SessionManagerLayer<PostgresStore> {
    configure_session_layer(PostgresStore::new(pool.clone()), config)
}

/// Apply the dashboard cookie settings to any session store.
#[must_use]
pub fn configure_session_layer<S>(store: S, config: &DashboardConfig) -> SessionManagerLayer<S>
where
    S: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::hours(config.session_expiry_hours),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}
