use std::time::Duration;

use jsonwebtoken::Algorithm;

/// Access tokens live this long unless configured otherwise.
pub const DEFAULT_ACCESS_TOKEN_TTL: Duration = Duration::from_secs(15 * 60);

/// Configuration for JWT security settings
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// JWT secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
    pub access_token_ttl: Duration,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            access_token_ttl: DEFAULT_ACCESS_TOKEN_TTL,
        }
    }

    pub fn with_access_token_ttl(mut self, ttl: Duration) -> Self {
        self.access_token_ttl = ttl;
        self
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
