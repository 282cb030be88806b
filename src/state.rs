//! Application state management
//!
//! Contains shared state accessible across all handlers.
//! All storage is backed by PostgreSQL; the pool behind the services is the
//! only shared resource.

use crate::db::service::{AccountService, CatalogService};
use deadpool_postgres::Pool;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// Account service for login and registration operations
    pub accounts: AccountService,

    /// Catalog service for artist, listener, and song operations
    pub catalog: CatalogService,
}

impl AppState {
    /// Create new application state around a database pool
    pub fn new(pool: Pool) -> Self {
        Self {
            accounts: AccountService::new(pool.clone()),
            catalog: CatalogService::new(pool),
        }
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
