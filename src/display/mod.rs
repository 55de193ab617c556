//! Display formatting for terminal output

pub mod budget;

pub use budget::{format_allocation, format_budget_summary, format_budget_view};
