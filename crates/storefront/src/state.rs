//! Application state shared across handlers.

use std::sync::Arc;

use mongodb::Database;

use crate::config::StorefrontConfig;
use crate::db::Collections;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and immutable after
/// construction; handlers share only the configuration and the collection
/// handles, which are safe for concurrent use.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    database: Database,
    collections: Collections,
}

impl AppState {
    /// Create a new application state from the connected database.
    #[must_use]
    pub fn new(config: StorefrontConfig, database: Database) -> Self {
        let collections = Collections::new(&database);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                database,
                collections,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the underlying database (readiness checks).
    #[must_use]
    pub fn database(&self) -> &Database {
        &self.inner.database
    }

    /// Get a reference to the collection handles.
    #[must_use]
    pub fn collections(&self) -> &Collections {
        &self.inner.collections
    }
}
