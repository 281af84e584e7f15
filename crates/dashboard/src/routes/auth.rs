//! Authentication route handlers.
//!
//! Username/password login form and logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::AppError;
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::{AuthError, AuthService};
use crate::state::AppState;

/// Message shown for any failed login.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<&'static str>,
    pub username: String,
}

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(login_page).post(login))
        .route("/logout", post(logout))
}

/// Render the login page.
///
/// Always shows the form, so a signed-in user can switch accounts.
///
/// GET /
async fn login_page() -> LoginTemplate {
    LoginTemplate {
        error: None,
        username: String::new(),
    }
}

/// Handle login form submission.
///
/// POST /
async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    match AuthService::new(state.store())
        .authenticate(&form.username, &form.password)
        .await
    {
        Ok(role) => {
            let user = CurrentUser::new(form.username, role);
            set_current_user(&session, &user).await?;
            Ok(Redirect::to("/dashboard").into_response())
        }
        Err(AuthError::InvalidCredentials) => Ok(LoginTemplate {
            error: Some(INVALID_CREDENTIALS_MESSAGE),
            username: form.username,
        }
        .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// Logout and destroy the session.
///
/// POST /logout
async fn logout(session: Session) -> Result<Redirect, AppError> {
    clear_current_user(&session).await?;
    Ok(Redirect::to("/"))
}
