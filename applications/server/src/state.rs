/// Shared application state
use crate::services::AuthService;
use jukebox_storage::SqliteStorage;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<SqliteStorage>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(db: Arc<SqliteStorage>, auth_service: Arc<AuthService>) -> Self {
        Self { db, auth_service }
    }
}
