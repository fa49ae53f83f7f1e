//! Shared application state for request handlers.

use crate::db::Database;

/// Shared application state, cloneable across handlers.
///
/// Holds the storage handle; handlers receive it via `axum::extract::State`
/// rather than reaching for a process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    /// Creates a new application state around the given storage handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}
