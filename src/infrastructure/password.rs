use crate::domain::password::PasswordHasher;
use anyhow::Result;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Infrastructure service for password hashing and verification
#[derive(Clone)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    /// Hash a plain text password using Argon2
    fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let password_hash = argon2::password_hash::PasswordHasher::hash_password(
            &argon2,
            password.as_bytes(),
            &salt,
        )
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
        .to_string();

        Ok(password_hash)
    }

    /// Verify a password against a hash.
    ///
    /// The PHC string records its own parameters, so hashes made with older
    /// cost settings keep verifying. A stored hash that does not parse fails
    /// closed to `false`.
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(h) => h,
            Err(e) => {
                tracing::warn!("stored password hash is malformed: {e}");
                return Ok(false);
            }
        };

        let argon2 = Argon2::default();

        Ok(argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
