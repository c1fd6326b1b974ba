use anyhow::Result;

/// Trait for password hashing and verification.
///
/// Hashing is CPU-bound and deliberately slow; callers on an async path must
/// run it through `tokio::task::spawn_blocking`.
pub trait PasswordHasher: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String>;

    /// Returns whether the plaintext matches the stored hash. A malformed
    /// stored hash verifies to `false` rather than erroring.
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool>;
}
