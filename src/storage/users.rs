//! User repository
//!
//! Username uniqueness is enforced by the `UNIQUE` constraint on the table;
//! a violation of that constraint, and only that one, comes back as
//! [`PaysplitError::Duplicate`].

use rusqlite::{ffi, params};

use super::Database;
use crate::error::PaysplitError;
use crate::models::{User, UserId};

/// Repository for user persistence
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Insert a new user and return its id
    pub fn insert(
        &self,
        username: &str,
        password_hash: &str,
        salt: &str,
    ) -> Result<UserId, PaysplitError> {
        let conn = self.db.connect()?;

        match conn.execute(
            "INSERT INTO users (username, password, salt) VALUES (?1, ?2, ?3)",
            params![username, password_hash, salt],
        ) {
            Ok(_) => Ok(UserId::new(conn.last_insert_rowid())),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                Err(PaysplitError::duplicate_user(username))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Look up a user by exact username
    pub fn find_by_username(&self, username: &str) -> Result<Option<User>, PaysplitError> {
        let conn = self.db.connect()?;

        match conn.query_row(
            "SELECT id, username, password, salt FROM users WHERE username = ?1",
            [username],
            |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    password_hash: row.get(2)?,
                    salt: row.get(3)?,
                })
            },
        ) {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
