//! Domain models for the dashboard.

pub mod sales;
pub mod session;

pub use sales::PageResult;
pub use session::{CurrentUser, keys as session_keys};
