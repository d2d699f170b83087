//! Master-password hashing.
//!
//! The master password is never stored; only its Argon2id hash (in PHC
//! string form) is written to the store file, and unlock is a plain
//! hash-and-compare. Entries themselves are not encrypted.

use anyhow::{Result, anyhow};
use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

/// Hashes a master password with a fresh random salt.
pub fn hash_master_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("Failed to hash master password: {}", e))?;
    Ok(hash.to_string())
}

/// Verifies a master password against a stored PHC hash string.
pub fn verify_master_password(password: &str, stored_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| anyhow!("Stored master hash is malformed: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
