use std::sync::Arc;

use tracing::info;

use crate::adapters::{InMemoryStore, SeaAccountRepo, SeaRestaurantRepo};
use crate::auth::password::PasswordHasher;
use crate::config::db::DbKind;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::repos::{AccountRepo, RestaurantRepo};
use crate::services::accounts::{AccountService, PasswordAccountService};
use crate::services::authorization::{AuthorizationPolicy, OwnerPolicy};
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

enum Storage {
    Memory(Arc<InMemoryStore>),
    Db(DbKind),
}

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    storage: Storage,
    password_hasher: PasswordHasher,
    account_service: Option<Arc<dyn AccountService>>,
    authorization: Option<Arc<dyn AuthorizationPolicy>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            storage: Storage::Memory(Arc::new(InMemoryStore::new())),
            password_hasher: PasswordHasher::default(),
            account_service: None,
            authorization: None,
        }
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.storage = Storage::Db(kind);
        self
    }

    /// Back both repositories with `store`; callers keep the handle to seed
    /// and inspect data.
    pub fn with_memory_store(mut self, store: Arc<InMemoryStore>) -> Self {
        self.storage = Storage::Memory(store);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub fn with_password_hasher(mut self, hasher: PasswordHasher) -> Self {
        self.password_hasher = hasher;
        self
    }

    /// Replace the default argon2/JWT account service.
    pub fn with_account_service(mut self, service: Arc<dyn AccountService>) -> Self {
        self.account_service = Some(service);
        self
    }

    /// Replace the default [`OwnerPolicy`].
    pub fn with_authorization(mut self, policy: Arc<dyn AuthorizationPolicy>) -> Self {
        self.authorization = Some(policy);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let accounts: Arc<dyn AccountRepo>;
        let restaurants: Arc<dyn RestaurantRepo>;
        let db = match self.storage {
            Storage::Memory(store) => {
                info!("Using in-memory store");
                accounts = store.clone();
                restaurants = store;
                None
            }
            Storage::Db(kind) => {
                // single entrypoint: connect + migrate
                let conn = bootstrap_db(kind).await?;
                accounts = Arc::new(SeaAccountRepo::new(conn.clone()));
                restaurants = Arc::new(SeaRestaurantRepo::new(conn.clone()));
                Some(conn)
            }
        };

        let account_service = match self.account_service {
            Some(service) => service,
            None => Arc::new(PasswordAccountService::new(
                accounts.clone(),
                self.password_hasher,
                self.security_config.clone(),
            )),
        };
        let authorization = self
            .authorization
            .unwrap_or_else(|| Arc::new(OwnerPolicy));

        Ok(AppState {
            accounts,
            restaurants,
            account_service,
            authorization,
            security: self.security_config,
            db,
        })
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
