//! User account model

use super::ids::UserId;

/// A row of the `users` table
///
/// The password itself is never stored, only its salted hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
    pub salt: String,
}

/// Normalize a username as typed, rejecting empty names
pub fn normalize_username(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
