//! Application state for the payroll reference API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::table::TableRegistry;

/// Shared application state.
///
/// Holds the table registry. Tables themselves are never cached here; each
/// request reloads the table it needs.
#[derive(Debug, Clone)]
pub struct AppState {
    registry: Arc<TableRegistry>,
}

impl AppState {
    /// Creates a new application state around `registry`.
    pub fn new(registry: TableRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Returns the table registry.
    pub fn registry(&self) -> &TableRegistry {
        &self.registry
    }
}
