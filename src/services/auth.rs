//! Authentication service
//!
//! Account creation and login. A wrong password and an unknown username are
//! indistinguishable to the caller: both return `Ok(None)` after the same
//! amount of hashing work.

use crate::crypto::{generate_salt, hash_password, verify_password, DUMMY_SALT};
use crate::error::{PaysplitError, PaysplitResult};
use crate::models::user::normalize_username;
use crate::models::UserId;
use crate::storage::Storage;

/// Service for user accounts
pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create an account with a fresh salt
    pub fn create_account(&self, username: &str, password: &str) -> PaysplitResult<UserId> {
        let username = normalize_username(username)
            .ok_or_else(|| PaysplitError::Validation("Username cannot be empty".into()))?;

        let salt = generate_salt()?;
        let password_hash = hash_password(password, &salt);
        let id = self.storage.users.insert(username, &password_hash, &salt)?;

        log::info!("Created account '{}' with id {}", username, id);
        Ok(id)
    }

    /// Return the user's id if the password matches
    pub fn authenticate(&self, username: &str, password: &str) -> PaysplitResult<Option<UserId>> {
        let Some(username) = normalize_username(username) else {
            return Ok(None);
        };

        match self.storage.users.find_by_username(username)? {
            Some(user) if verify_password(password, &user.salt, &user.password_hash) => {
                log::info!("User {} logged in", user.id);
                Ok(Some(user.id))
            }
            Some(_) => {
                log::debug!("Login rejected");
                Ok(None)
            }
            None => {
                // Same work as a real check so timing does not reveal which part failed
                let _ = verify_password(password, DUMMY_SALT, "");
                log::debug!("Login rejected");
                Ok(None)
            }
        }
    }
}
