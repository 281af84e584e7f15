//! Core types for the sales dashboard.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod pagination;
pub mod role;
pub mod sale;

pub use id::*;
pub use pagination::{PAGE_SIZE, PageNumber, PageWindow, total_pages};
pub use role::Role;
pub use sale::SalesRecord;
