//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use putka_verdict::MaskingPolicy;
use sqlx::PgPool;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { db, config }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// What ordinary users of this deployment may see
    pub fn masking(&self) -> &MaskingPolicy {
        &self.inner.config.putka.masking
    }
}
