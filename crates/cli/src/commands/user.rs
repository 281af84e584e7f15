//! User management commands.

use sales_dashboard::db::{RepositoryError, users};
use sales_dashboard_core::Role;

use super::{CommandError, connect};

/// Create a new dashboard user.
///
/// # Errors
///
/// Returns `CommandError::InvalidArgument` for an empty username, password or
/// role, or if the username is taken.
pub async fn create(username: &str, password: &str, role: &str) -> Result<(), CommandError> {
    if username.trim().is_empty() {
        return Err(CommandError::InvalidArgument("username is empty".to_string()));
    }
    if password.is_empty() {
        return Err(CommandError::InvalidArgument("password is empty".to_string()));
    }
    if role.is_empty() {
        return Err(CommandError::InvalidArgument("role is empty".to_string()));
    }

    let pool = connect().await?;

    users::create_user(&pool, username, password, role)
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(msg) => CommandError::InvalidArgument(msg),
            other => CommandError::Repository(other),
        })?;

    let resolved = Role::from_stored(role);
    tracing::info!(username = %username, stored_role = %role, role = %resolved, "User created");
    if !resolved.is_admin() {
        tracing::warn!(
            "Role '{role}' is not '{}'; this user cannot view the sales listing",
            Role::ADMIN_LABEL
        );
    }
    tracing::warn!("The password is stored in plaintext in the users table");

    Ok(())
}
