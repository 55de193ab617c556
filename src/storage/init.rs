//! Storage initialization
//!
//! Creates the schema on first run. Every statement is idempotent, so this
//! runs on every start.

use std::path::Path;

use super::Database;
use crate::error::PaysplitError;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    salt TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS budgets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    category TEXT NOT NULL,
    percentage REAL NOT NULL CHECK (percentage >= 0 AND percentage <= 100),
    income REAL NOT NULL,
    paychecks INTEGER NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users (id)
);

CREATE INDEX IF NOT EXISTS budgets_user_id ON budgets (user_id);
";

/// Ensure the `users` and `budgets` tables exist
pub fn initialize_schema(database: &Database) -> Result<(), PaysplitError> {
    log::debug!("Ensuring schema in {}", database.path().display());
    let connection = database.connect()?;
    connection.execute_batch(SCHEMA)?;
    Ok(())
}

/// Check if the database file still has to be created
pub fn needs_initialization(path: &Path) -> bool {
    !path.exists()
}
