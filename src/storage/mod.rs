//! Storage layer for paysplit
//!
//! A single SQLite file holds the `users` and `budgets` tables. Every
//! repository call opens its own connection and drops it before returning,
//! so no connection outlives the operation that needed it.

pub mod budgets;
pub mod init;
pub mod users;

pub use budgets::BudgetRepository;
pub use init::initialize_schema;
pub use users::UserRepository;

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::config::{PaysplitPaths, Settings};
use crate::error::PaysplitError;

/// Location of the SQLite database and how to connect to it
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a connection with foreign keys enforced
    pub fn connect(&self) -> Result<Connection, PaysplitError> {
        let connection = Connection::open(&self.path)?;
        connection.pragma_update(None, "foreign_keys", "ON")?;
        Ok(connection)
    }
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    database: Database,
    created: bool,
    pub users: UserRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Open the database, creating the directory, file and schema if needed
    pub fn open(paths: &PaysplitPaths, settings: &Settings) -> Result<Self, PaysplitError> {
        paths.ensure_directories()?;

        let database = Database::new(paths.database_file(&settings.database_file));
        let created = init::needs_initialization(database.path());
        initialize_schema(&database)?;

        Ok(Self {
            users: UserRepository::new(database.clone()),
            budgets: BudgetRepository::new(database.clone()),
            database,
            created,
        })
    }

    /// Whether this call to [`Storage::open`] created a new database file
    pub fn was_created(&self) -> bool {
        self.created
    }

    pub fn database(&self) -> &Database {
        &self.database
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PaysplitPaths::with_base_dir(temp_dir.path().join("profile"));
        let storage = Storage::open(&paths, &Settings::default()).unwrap();

        assert!(storage.was_created());
        assert!(temp_dir.path().join("profile").join("paysplit.db").exists());
    }

    #[test]
    fn test_reopen_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PaysplitPaths::with_base_dir(temp_dir.path().to_path_buf());

        let first = Storage::open(&paths, &Settings::default()).unwrap();
        assert!(first.was_created());

        let second = Storage::open(&paths, &Settings::default()).unwrap();
        assert!(!second.was_created());
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let (storage, _temp) = test_support::temp_storage();
        let conn = storage.database().connect().unwrap();
        let enabled: i64 = conn
            .pragma_query_value(None, "foreign_keys", |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }
}
