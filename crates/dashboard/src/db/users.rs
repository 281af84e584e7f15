//! Credential queries against the `users` table.
//!
//! Passwords are stored and compared as plaintext. This mirrors the existing
//! `users` table and is a known weakness: anyone with read access to the
//! table can read every password. Moving to hashed passwords needs a schema
//! change plus a rehash of existing rows.

use sqlx::{PgConnection, PgPool};

use sales_dashboard_core::Role;

use super::RepositoryError;

/// Look up the role for an exact username AND password match.
///
/// Returns `None` when no row matches; callers must not distinguish a wrong
/// username from a wrong password.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn find_role(
    conn: &mut PgConnection,
    username: &str,
    password: &str,
) -> Result<Option<Role>, RepositoryError> {
    let role = sqlx::query_scalar::<_, String>(
        r"
        SELECT role
        FROM users
        WHERE username = $1 AND password = $2
        ",
    )
    .bind(username)
    .bind(password)
    .fetch_optional(conn)
    .await?;

    Ok(role.as_deref().map(Role::from_stored))
}

/// Insert a credential row.
///
/// `role` is stored verbatim; only the exact text `Admin` passes the role gate.
///
/// # Errors
///
/// Returns `RepositoryError::Conflict` if the username already exists.
/// Returns `RepositoryError::Database` for other database errors.
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    password: &str,
    role: &str,
) -> Result<(), RepositoryError> {
    sqlx::query(
        r"
        INSERT INTO users (username, password, role)
        VALUES ($1, $2, $3)
        ",
    )
    .bind(username)
    .bind(password)
    .bind(role)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e
            && db_err.is_unique_violation()
        {
            return RepositoryError::Conflict(format!("username '{username}' already exists"));
        }
        RepositoryError::Database(e)
    })?;

    Ok(())
}
