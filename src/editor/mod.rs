//! Interactive budget editor
//!
//! Collects income, paycheck count and categories, replaces the user's
//! stored budget, then prints a summary. A failed save is reported and the
//! summary is still shown; the session carries on either way.

pub mod session;
pub mod steps;

pub use session::{category_name, AddOutcome, BudgetDraft, DraftError};

use std::io::{BufRead, Write};

use crate::cli::console::Console;
use crate::config::Settings;
use crate::display::format_budget_summary;
use crate::error::{PaysplitError, PaysplitResult};
use crate::models::{Budget, UserId};
use crate::services::BudgetService;
use crate::storage::Storage;

use steps::{CategoriesStep, IncomeStep};

/// Result of one editing session
pub struct EditOutcome {
    /// The budget that was entered
    pub budget: Budget,
    /// Whether it reached the database
    pub saved: bool,
}

/// The budget editor
pub struct BudgetEditor<'a> {
    budgets: BudgetService<'a>,
    settings: &'a Settings,
}

impl<'a> BudgetEditor<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            budgets: BudgetService::new(storage),
            settings,
        }
    }

    /// Run a full editing session for `user_id`
    pub fn run<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        user_id: UserId,
    ) -> PaysplitResult<EditOutcome> {
        let income = IncomeStep::run(console)?;

        let mut draft = BudgetDraft::new(income.income, income.paychecks);
        CategoriesStep::run(console, &mut draft)?;

        // CategoriesStep only returns once the draft is complete
        let budget = draft
            .finish()
            .map_err(|e| PaysplitError::Validation(e.to_string()))?;

        let saved = match self.budgets.replace(user_id, &budget) {
            Ok(()) => {
                console.say("Budget saved successfully.")?;
                true
            }
            Err(e) if e.is_recoverable() => {
                log::warn!("Saving budget for user {} failed: {}", user_id, e);
                console.say(format!("Error saving budget: {}", e))?;
                false
            }
            Err(e) => return Err(e),
        };

        console.print(format_budget_summary(&budget, &self.settings.currency_symbol))?;

        Ok(EditOutcome { budget, saved })
    }
}
