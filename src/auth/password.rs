use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::error::ApiError;

/// Hashes a plaintext password into PHC string format with a fresh salt.
pub fn hash_password(plain: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("failed to hash password: {}", e)))
}

/// Verifies a plaintext password against a stored PHC hash.
///
/// A mismatch is an `Ok(false)`, not an error; only an unparseable stored
/// hash is treated as a server fault.
pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, ApiError> {
    let parsed = PasswordHash::new(hashed)
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("stored password hash is invalid: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}
