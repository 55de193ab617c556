//! View the stored budget

use std::io::{BufRead, Write};

use crate::cli::console::Console;
use crate::config::Settings;
use crate::display::format_budget_view;
use crate::error::PaysplitResult;
use crate::models::UserId;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Print the user's budget, or say that there is none
pub fn view_budget<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
    settings: &Settings,
    user_id: UserId,
) -> PaysplitResult<()> {
    match BudgetService::new(storage).load(user_id) {
        Ok(Some(budget)) => {
            console.print(format_budget_view(user_id, &budget, &settings.currency_symbol))
        }
        Ok(None) => console.say("No budget found for this user."),
        Err(e) if e.is_recoverable() => console.say(format!("Error fetching budget: {}", e)),
        Err(e) => Err(e),
    }
}
