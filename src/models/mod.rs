//! Core data models for paysplit
//!
//! Users, budgets and the value types used to compute allocations.

pub mod budget;
pub mod ids;
pub mod money;
pub mod percentage;
pub mod user;

pub use budget::{Allocation, Budget, BudgetEntry, CategoryShare};
pub use ids::UserId;
pub use money::Money;
pub use percentage::Percentage;
pub use user::User;
