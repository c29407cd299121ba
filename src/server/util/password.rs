//! Password hashing with argon2.
//!
//! Hashes are stored as PHC strings, so the algorithm parameters and salt travel with
//! the hash and verification needs nothing else.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::internal::InternalError;

/// Hashes a plain text password with a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC formatted argon2 hash
/// - `Err(InternalError::PasswordHash)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::PasswordHash(e.to_string()))
}

/// Checks a plain text password against a stored hash.
///
/// A stored value that is not a valid PHC string never matches.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
