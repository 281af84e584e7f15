//! Unified error handling for the dashboard.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::{AuthError, ListingError};

/// Body returned when a non-admin requests the sales listing.
pub const ACCESS_DENIED_MESSAGE: &str = "Access Denied: Admin only";

/// Body returned when a store query fails.
pub const QUERY_FAILED_MESSAGE: &str = "Query failed";

/// Application-level error type for the dashboard.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Session store read or write failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// User is not logged in.
    #[error("Unauthenticated")]
    Unauthenticated,

    /// User lacks permission.
    #[error("Forbidden")]
    Forbidden,

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ListingError> for AppError {
    fn from(err: ListingError) -> Self {
        match err {
            ListingError::Unauthenticated => Self::Unauthenticated,
            ListingError::AccessDenied => Self::Forbidden,
            ListingError::Store(e) => Self::Database(e),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            // The login handler renders the form itself; reaching here is a bug
            AuthError::InvalidCredentials => {
                Self::Internal("unhandled invalid credentials".to_string())
            }
            AuthError::Store(e) => Self::Database(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if matches!(self, Self::Database(_) | Self::Session(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Dashboard request error"
            );
        }

        // Don't expose internal error details to clients
        match self {
            Self::Unauthenticated => Redirect::to("/").into_response(),
            Self::Forbidden => (StatusCode::FORBIDDEN, ACCESS_DENIED_MESSAGE).into_response(),
            Self::Database(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, QUERY_FAILED_MESSAGE).into_response()
            }
            Self::Session(_) | Self::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

/// Set the Sentry user context from the session username.
pub fn set_sentry_user(username: &str) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            username: Some(username.to_string()),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

#[cfg(test)]
mod tests {
    use axum::http::header::LOCATION;

    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_listing_errors_map_to_app_errors() {
        assert!(matches!(
            AppError::from(ListingError::Unauthenticated),
            AppError::Unauthenticated
        ));
        assert!(matches!(
            AppError::from(ListingError::AccessDenied),
            AppError::Forbidden
        ));
        assert!(matches!(
            AppError::from(ListingError::Store(RepositoryError::Database(
                sqlx::Error::PoolTimedOut
            ))),
            AppError::Database(_)
        ));
    }

    #[test]
    fn test_auth_errors_never_become_redirects() {
        let response = AppError::from(AuthError::InvalidCredentials).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(LOCATION).is_none());

        assert!(matches!(
            AppError::from(AuthError::Store(RepositoryError::Database(
                sqlx::Error::PoolTimedOut
            ))),
            AppError::Database(_)
        ));
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(get_status(AppError::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(
            get_status(AppError::Database(RepositoryError::Database(
                sqlx::Error::PoolTimedOut
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        let response = AppError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
            Some("/")
        );
    }
}
