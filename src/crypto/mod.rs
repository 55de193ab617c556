//! Cryptographic functions for paysplit
//!
//! Salted SHA-256 password hashing and zeroize-on-drop password storage.

pub mod password;
pub mod secure_memory;

pub use password::{generate_salt, hash_password, verify_password, DUMMY_SALT};
pub use secure_memory::SecretString;
