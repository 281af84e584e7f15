//! Session-related types for dashboard authentication.

use serde::{Deserialize, Serialize};

use sales_dashboard_core::Role;

/// Session-stored user identity.
///
/// Written once at login and read on every dashboard request. The role is
/// captured at login time; role changes take effect on the next login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Login name.
    pub username: String,
    /// Role resolved at login.
    pub role: Role,
}

impl CurrentUser {
    /// Create a session identity.
    #[must_use]
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }

    /// Whether this user may view the sales listing.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Session keys for dashboard authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}
