//! Application state shared across handlers.

use std::sync::Arc;

use crate::db::RecordStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Handlers reach the database only through the
/// [`RecordStore`], never through a raw pool.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RecordStore>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Get a reference to the record store.
    #[must_use]
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }
}
