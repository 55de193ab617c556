//! Budget service
//!
//! Validation on top of the budget repository.

use crate::error::PaysplitResult;
use crate::models::{Budget, UserId};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Replace the user's stored budget with a new, complete one
    pub fn replace(&self, user_id: UserId, budget: &Budget) -> PaysplitResult<()> {
        budget.validate()?;

        let removed = self.storage.budgets.replace_for_user(user_id, budget)?;
        log::info!(
            "Replaced budget of user {}: {} old rows, {} new rows",
            user_id,
            removed,
            budget.shares.len()
        );

        Ok(())
    }

    /// Load the user's budget, if one has been saved
    pub fn load(&self, user_id: UserId) -> PaysplitResult<Option<Budget>> {
        let entries = self.storage.budgets.entries_for_user(user_id)?;
        log::debug!("Loaded {} budget rows for user {}", entries.len(), user_id);
        Ok(Budget::from_entries(entries))
    }
}
