//! Shared application state
//!
//! The state handed to every axum handler through the router.

use sqlx::SqlitePool;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
