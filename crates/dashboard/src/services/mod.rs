//! Business logic services for the dashboard.
//!
//! # Services
//!
//! - `auth` - Username/password credential check
//! - `pagination` - Role-gated, timed sales listing

pub mod auth;
pub mod pagination;

pub use auth::{AuthError, AuthService};
pub use pagination::{ListingError, Paginator};
