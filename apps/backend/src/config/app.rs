//! Server settings read at start-up.

use std::time::Duration;

use super::db::{must_var, DbKind};
use super::{ProcessEnv, VarSource};
use crate::error::AppError;
use crate::state::security_config::{SecurityConfig, DEFAULT_ACCESS_TOKEN_TTL};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_kind: DbKind,
    pub cors_allowed_origins: Vec<String>,
    pub security: SecurityConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(&ProcessEnv)
    }

    pub fn from_vars(vars: &dyn VarSource) -> Result<Self, AppError> {
        let host = vars
            .var("RESTAURANT_API_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match vars.var("RESTAURANT_API_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config("RESTAURANT_API_PORT must be a valid port number")
            })?,
            None => 3001,
        };

        let jwt_secret = must_var(vars, "RESTAURANT_API_JWT_SECRET")?;
        let ttl = match vars.var("RESTAURANT_API_JWT_TTL_MINUTES") {
            Some(raw) => {
                let minutes = raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|m| *m > 0)
                    .ok_or_else(|| {
                        AppError::config("RESTAURANT_API_JWT_TTL_MINUTES must be a positive integer")
                    })?;
                // Token expiry is an i64 seconds claim.
                let secs = minutes
                    .checked_mul(60)
                    .filter(|s| i64::try_from(*s).is_ok())
                    .ok_or_else(|| AppError::config("RESTAURANT_API_JWT_TTL_MINUTES is too large"))?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_ACCESS_TOKEN_TTL,
        };

        let db_kind = match vars.var("RESTAURANT_API_DB") {
            Some(raw) => raw.parse()?,
            None => DbKind::default(),
        };

        let cors_allowed_origins = vars
            .var("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            db_kind,
            cors_allowed_origins,
            security: SecurityConfig::new(jwt_secret.into_bytes()).with_access_token_ttl(ttl),
        })
    }
}
