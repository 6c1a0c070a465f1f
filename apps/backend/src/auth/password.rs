//! Password hashing with Argon2id.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::AppError;

/// Argon2id hasher producing PHC strings.
///
/// `Default` uses the argon2 crate defaults (m=19456 KiB, t=2, p=1).
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, AppError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AppError::config(format!("Invalid Argon2 parameters: {e}")))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'_> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// `false` on mismatch or an unparseable stored hash.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        self.argon2()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}
