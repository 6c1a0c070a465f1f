//! AppState over a shared in-memory store, with cheap password hashing.

use std::sync::Arc;

use restaurant_api::auth::password::PasswordHasher;
use restaurant_api::services::accounts::AccountService;
use restaurant_api::services::authorization::AuthorizationPolicy;
use restaurant_api::{build_state, AppState, InMemoryStore, SecurityConfig};

pub const TEST_JWT_SECRET: &[u8] = b"integration-test-secret";

/// The state plus the handles tests use to seed and inspect it.
pub struct TestState {
    pub state: AppState,
    pub store: Arc<InMemoryStore>,
    pub security: SecurityConfig,
}

#[derive(Default)]
pub struct TestStateBuilder {
    store: Option<Arc<InMemoryStore>>,
    account_service: Option<Arc<dyn AccountService>>,
    authorization: Option<Arc<dyn AuthorizationPolicy>>,
}

impl TestStateBuilder {
    pub fn with_store(mut self, store: Arc<InMemoryStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_account_service(mut self, service: Arc<dyn AccountService>) -> Self {
        self.account_service = Some(service);
        self
    }

    pub fn with_authorization(mut self, policy: Arc<dyn AuthorizationPolicy>) -> Self {
        self.authorization = Some(policy);
        self
    }

    pub async fn build(self) -> TestState {
        let store = self.store.unwrap_or_default();
        let security = SecurityConfig::new(TEST_JWT_SECRET);

        let mut builder = build_state()
            .with_memory_store(store.clone())
            .with_security(security.clone())
            .with_password_hasher(
                PasswordHasher::with_params(1024, 1, 1).expect("cheap argon2 params are valid"),
            );
        if let Some(service) = self.account_service {
            builder = builder.with_account_service(service);
        }
        if let Some(policy) = self.authorization {
            builder = builder.with_authorization(policy);
        }

        let state = builder.build().await.expect("memory state builds");
        TestState {
            state,
            store,
            security,
        }
    }
}

impl TestState {
    pub fn builder() -> TestStateBuilder {
        TestStateBuilder::default()
    }

    pub async fn new() -> Self {
        Self::builder().build().await
    }
}
