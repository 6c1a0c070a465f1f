//! Registration and login.

use std::sync::Arc;
use std::time::SystemTime;

use async_trait::async_trait;
use tracing::info;

use crate::auth::jwt::mint_access_token;
use crate::auth::password::PasswordHasher;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::models::account::{normalize_email, LoginDto, RegisterUserDto};
use crate::repos::{AccountRepo, NewUser};
use crate::state::security_config::SecurityConfig;

pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Authentication collaborator used by the account routes.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Persist a new account. Callers validate `dto` first.
    async fn register_user(&self, dto: RegisterUserDto) -> Result<(), AppError>;

    /// Check credentials and return a signed access token.
    async fn generate_jwt(&self, dto: LoginDto) -> Result<String, AppError>;
}

/// Argon2 password hashes plus HS256 tokens over an `AccountRepo`.
pub struct PasswordAccountService {
    accounts: Arc<dyn AccountRepo>,
    hasher: PasswordHasher,
    security: SecurityConfig,
}

impl PasswordAccountService {
    pub fn new(accounts: Arc<dyn AccountRepo>, hasher: PasswordHasher, security: SecurityConfig) -> Self {
        Self {
            accounts,
            hasher,
            security,
        }
    }
}

fn invalid_credentials() -> AppError {
    AppError::bad_request(ErrorCode::InvalidCredentials, INVALID_CREDENTIALS)
}

#[async_trait]
impl AccountService for PasswordAccountService {
    async fn register_user(&self, dto: RegisterUserDto) -> Result<(), AppError> {
        let email = normalize_email(&dto.email);
        let password_hash = self.hasher.hash(&dto.password)?;
        let user = self
            .accounts
            .create_user(NewUser {
                email,
                password_hash,
                nationality: dto.nationality,
                role: dto.role.unwrap_or_default(),
            })
            .await?;

        info!(user_id = user.id, email = %Redacted(&user.email), role = %user.role, "User registered");
        Ok(())
    }

    async fn generate_jwt(&self, dto: LoginDto) -> Result<String, AppError> {
        let email = normalize_email(&dto.email);
        let Some(user) = self.accounts.find_by_email(&email).await? else {
            security::login_failed("unknown_email", &email);
            return Err(invalid_credentials());
        };

        if !self.hasher.verify(&dto.password, &user.password_hash) {
            security::login_failed("wrong_password", &email);
            return Err(invalid_credentials());
        }

        mint_access_token(&user, SystemTime::now(), &self.security)
    }
}
