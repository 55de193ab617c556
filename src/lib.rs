//! paysplit - percentage budgeting in the terminal
//!
//! Users log in, record a monthly income, a number of paychecks and a set
//! of categories whose percentages add up to 100, and then see how any
//! amount splits across those categories. Everything is kept in a local
//! SQLite database.
//!
//! # Architecture
//!
//! - `config`: Data directory and settings
//! - `error`: Error types
//! - `models`: Users, budgets, percentages and money
//! - `storage`: SQLite schema and repositories
//! - `crypto`: Password hashing and secret handling
//! - `services`: Account and budget operations
//! - `editor`: Interactive budget entry
//! - `display`: Text formatting for budgets and allocations
//! - `cli`: Login and main menu flows
//!
//! # Example
//!
//! ```rust,ignore
//! use paysplit::config::{PaysplitPaths, Settings};
//! use paysplit::storage::Storage;
//!
//! let paths = PaysplitPaths::resolve(None)?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(&paths, &settings)?;
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod editor;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{PaysplitError, PaysplitResult};
