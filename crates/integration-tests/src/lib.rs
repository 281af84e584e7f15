//! Integration tests for the sales dashboard.
//!
//! # Running Tests
//!
//! ```bash
//! # Migrate and start the server against a test database
//! sd-cli migrate
//! cargo run -p sales-dashboard
//!
//! # Run the ignored integration tests
//! cargo test -p sales-dashboard-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_DATABASE_URL` - Same database the server uses
//! - `DASHBOARD_BASE_URL` - Server URL (default: <http://localhost:3000>)

use reqwest::{Client, redirect::Policy};
use secrecy::SecretString;
use sqlx::PgPool;
use uuid::Uuid;

use sales_dashboard::db::{self, RepositoryError};
use sales_dashboard_core::Role;

/// Shared handles for a test run.
pub struct TestContext {
    /// Server base URL without a trailing slash.
    pub base_url: String,
    /// Pool on the server's database, used for fixtures.
    pub pool: PgPool,
}

/// A credential created for a single test.
pub struct TestUser {
    pub username: String,
    pub password: String,
}

impl TestContext {
    /// Connect to the test database.
    ///
    /// # Panics
    ///
    /// Panics if `DASHBOARD_DATABASE_URL` is unset or the database is unreachable.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();
        let database_url = std::env::var("DASHBOARD_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .map(SecretString::from)
            .expect("DASHBOARD_DATABASE_URL must be set for integration tests");
        let pool = db::create_pool(&database_url, 2)
            .await
            .expect("Failed to connect to test database");

        Self {
            base_url: base_url(),
            pool,
        }
    }

    /// Insert a fresh user with a unique name and the given stored role.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the insert fails.
    pub async fn create_user(&self, role: &str) -> Result<TestUser, RepositoryError> {
        let username = format!("it-{}", Uuid::new_v4());
        let password = Uuid::new_v4().to_string();
        db::users::create_user(&self.pool, &username, &password, role).await?;
        Ok(TestUser { username, password })
    }

    /// Insert a fresh admin user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the insert fails.
    pub async fn create_admin(&self) -> Result<TestUser, RepositoryError> {
        self.create_user(Role::ADMIN_LABEL).await
    }

    /// Current number of sales rows.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the count fails.
    pub async fn sales_count(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        db::sales::count_all(&mut conn).await
    }

    /// Build a URL on the server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Server base URL (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("DASHBOARD_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string())
        .trim_end_matches('/')
        .to_string()
}

/// HTTP client that keeps cookies and does not follow redirects.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}
