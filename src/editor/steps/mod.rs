//! Budget editor steps
//!
//! Individual steps in the editing flow.

pub mod categories;
pub mod income;

pub use categories::CategoriesStep;
pub use income::{IncomeStep, IncomeStepResult};
