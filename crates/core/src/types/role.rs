//! User roles for the dashboard role gate.

use serde::{Deserialize, Serialize};

/// Role attached to a credential.
///
/// Roles are stored as free text in the `users` table. Only the exact value
/// `Admin` grants access to the sales listing; every other stored value is
/// collapsed into [`Role::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// May view the sales listing.
    Admin,
    /// Authenticated, but denied the sales listing.
    Other,
}

impl Role {
    /// Text value stored for the admin role.
    pub const ADMIN_LABEL: &'static str = "Admin";

    /// Map a stored role value onto a [`Role`].
    ///
    /// Matching is exact and case-sensitive: `"admin"` is not an admin.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        if value == Self::ADMIN_LABEL {
            Self::Admin
        } else {
            Self::Other
        }
    }

    /// Whether this role passes the admin gate.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "Admin"),
            Self::Other => write!(f, "Other"),
        }
    }
}
