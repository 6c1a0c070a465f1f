use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::repos::{AccountRepo, RestaurantRepo};
use crate::services::accounts::AccountService;
use crate::services::authorization::AuthorizationPolicy;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountRepo>,
    pub restaurants: Arc<dyn RestaurantRepo>,
    pub account_service: Arc<dyn AccountService>,
    pub authorization: Arc<dyn AuthorizationPolicy>,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
    /// Database connection; `None` when running on the in-memory store
    pub db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("security", &self.security)
            .field("db", &self.db.is_some())
            .finish_non_exhaustive()
    }
}
