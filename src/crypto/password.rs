//! Salted password hashing
//!
//! Passwords are stored as `base64(SHA-256(salt ‖ password))`, where the salt
//! is 16 random bytes kept in its base64 text form. The hash input is the
//! salt *text*, so stored salts can be used as-is without decoding.

use argon2::password_hash::rand_core::{OsRng, RngCore};
use base64::{engine::general_purpose::STANDARD, Engine};
use sha2::{Digest, Sha256};

use crate::error::{PaysplitError, PaysplitResult};

/// Number of random bytes in a salt
pub const SALT_LEN: usize = 16;

/// Salt hashed against when a username does not exist
pub const DUMMY_SALT: &str = "AAAAAAAAAAAAAAAAAAAAAA==";

/// Generate a fresh base64-encoded salt from the OS random source
pub fn generate_salt() -> PaysplitResult<String> {
    let mut bytes = [0u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| PaysplitError::Crypto(format!("Failed to generate salt: {}", e)))?;
    Ok(STANDARD.encode(bytes))
}

/// Hash a password with the given salt
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    STANDARD.encode(hasher.finalize())
}

/// Check a password against a stored hash and salt
pub fn verify_password(password: &str, salt: &str, stored_hash: &str) -> bool {
    let computed = hash_password(password, salt);
    constant_time_eq(computed.as_bytes(), stored_hash.as_bytes())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
