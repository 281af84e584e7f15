//! Authentication service.
//!
//! Checks a username/password pair against the credential table and resolves
//! the role. There is no rate limiting or lockout, and passwords are compared
//! in plaintext by the store (see [`crate::db::users`]).

mod error;

pub use error::AuthError;

use sales_dashboard_core::Role;

use crate::db::RecordStore;

/// Authentication service.
pub struct AuthService<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// Verify a username/password pair.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if no row matches both values.
    /// Returns `AuthError::Store` if the lookup itself fails.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Role, AuthError> {
        let mut conn = self.store.acquire().await?;
        let role = conn.find_role(username, password).await?;

        match role {
            Some(role) => {
                tracing::info!(username = %username, role = %role, "Login succeeded");
                Ok(role)
            }
            None => {
                tracing::warn!(username = %username, "Login failed: invalid credentials");
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}
