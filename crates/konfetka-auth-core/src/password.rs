//! Password hashing and verification.
//!
//! Argon2 with a fresh random salt per call. The PHC output string embeds
//! the salt and work-factor parameters, so verification needs nothing but
//! the stored hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::AuthError;

/// Hash a password using argon2
pub fn hash_password(plain: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| AuthError::Internal(format!("password hashing failed: {e}")))?
        .to_string();
    Ok(hash)
}

/// Verify a password against a stored hash
///
/// Malformed hashes verify as `false` rather than erroring.
pub fn verify_password(plain: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed_hash)
        .is_ok()
}
