use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::repos::{Role, User};
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Claims included in our backend-issued access tokens.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// User id (users.id), stringified
    pub sub: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Mint a HS256 JWT access token for `user`, valid for the configured TTL.
pub fn mint_access_token(
    user: &User,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time"))?
        .as_secs();
    let iat = i64::try_from(iat).map_err(|_| AppError::internal("Clock out of range"))?;
    let exp = i64::try_from(security.access_token_ttl.as_secs())
        .ok()
        .and_then(|ttl| iat.checked_add(ttl))
        .ok_or_else(|| AppError::config("Access token TTL out of range"))?;

    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        role: user.role,
        nationality: user.nationality.clone(),
        iat,
        exp,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify JWT and return claims.
///
/// Expired tokens map to `UnauthorizedExpiredJwt`; every other decode
/// failure maps to `UnauthorizedInvalidJwt`.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    // Default Validation already checks exp; pin algorithm to configured algorithm.
    let mut validation = Validation::new(security.algorithm);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::unauthorized_expired_jwt(),
        _ => AppError::unauthorized_invalid_jwt(),
    })
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::{mint_access_token, verify_access_token};
    use crate::repos::{Role, User};
    use crate::state::security_config::SecurityConfig;
    use crate::AppError;

    fn manager() -> User {
        User {
            id: 42,
            email: "manager@example.com".into(),
            password_hash: "unused".into(),
            nationality: Some("German".into()),
            role: Role::Manager,
        }
    }

    #[test]
    fn test_mint_and_verify_roundtrip() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());
        let now = SystemTime::now();

        let token = mint_access_token(&manager(), now, &security).unwrap();
        let claims = verify_access_token(&token, &security).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "manager@example.com");
        assert_eq!(claims.role, Role::Manager);
        assert_eq!(claims.nationality.as_deref(), Some("German"));
        assert_eq!(
            claims.iat,
            now.duration_since(UNIX_EPOCH).unwrap().as_secs() as i64
        );
        assert_eq!(claims.exp, claims.iat + 15 * 60);
    }

    #[test]
    fn test_configured_ttl_is_used() {
        let security =
            SecurityConfig::new("ttl-secret".as_bytes()).with_access_token_ttl(Duration::from_secs(60));
        let token = mint_access_token(&manager(), SystemTime::now(), &security).unwrap();
        let claims = verify_access_token(&token, &security).unwrap();
        assert_eq!(claims.exp - claims.iat, 60);
    }

    #[test]
    fn test_ttl_past_i64_is_rejected() {
        let security = SecurityConfig::new("ttl-secret".as_bytes())
            .with_access_token_ttl(Duration::from_secs(u64::MAX));
        let result = mint_access_token(&manager(), SystemTime::now(), &security);
        assert!(matches!(result, Err(AppError::Config { .. })));
    }

    #[test]
    fn test_expired_token() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());
        // 20 minutes ago so 15-minute token is expired
        let now = SystemTime::now() - Duration::from_secs(20 * 60);

        let token = mint_access_token(&manager(), now, &security).unwrap();
        let result = verify_access_token(&token, &security);

        assert!(matches!(result, Err(AppError::UnauthorizedExpiredJwt)));
    }

    #[test]
    fn test_bad_signature() {
        let security_a = SecurityConfig::new("secret-A".as_bytes());
        let token = mint_access_token(&manager(), SystemTime::now(), &security_a).unwrap();

        let security_b = SecurityConfig::new("secret-B".as_bytes());
        let result = verify_access_token(&token, &security_b);

        assert!(matches!(result, Err(AppError::UnauthorizedInvalidJwt)));
    }

    #[test]
    fn test_garbage_token() {
        let security = SecurityConfig::default();
        assert!(matches!(
            verify_access_token("not.a.jwt", &security),
            Err(AppError::UnauthorizedInvalidJwt)
        ));
    }
}
