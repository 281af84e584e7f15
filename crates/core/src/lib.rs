//! Sales Dashboard Core - Shared types library.
//!
//! This crate provides common types used across the sales dashboard components:
//! - `dashboard` - Role-gated web dashboard listing sales records
//! - `cli` - Command-line tools for migrations, users and seed data
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP. The pagination arithmetic lives here so it can be tested
//! without a store.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, roles, sales records and pagination windows

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
