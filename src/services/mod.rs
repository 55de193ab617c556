//! Service layer for paysplit
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and computed fields.

pub mod auth;
pub mod budget;

pub use auth::AuthService;
pub use budget::BudgetService;
