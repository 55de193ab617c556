//! Split an arbitrary amount across the stored budget

use std::io::{BufRead, Write};

use crate::cli::console::Console;
use crate::config::Settings;
use crate::display::format_allocation;
use crate::error::PaysplitResult;
use crate::models::UserId;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Ask for an amount and show how the stored percentages divide it
///
/// The budget is loaded once, before prompting, and the split is computed
/// from that copy. Nothing is written.
pub fn allocate_budget<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
    settings: &Settings,
    user_id: UserId,
) -> PaysplitResult<()> {
    let budget = match BudgetService::new(storage).load(user_id) {
        Ok(Some(budget)) => budget,
        Ok(None) => return console.say("No budget created."),
        Err(e) if e.is_recoverable() => {
            return console.say(format!("Error fetching budget: {}", e))
        }
        Err(e) => return Err(e),
    };

    let amount = console
        .prompt_positive_amount("Enter a positive amount to allocate across your budget categories: ")?;

    console.print(format_allocation(
        amount,
        &budget.allocate(amount),
        &settings.currency_symbol,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::console::test_support::{output, scripted};
    use crate::models::{Budget, CategoryShare, Percentage};
    use crate::storage::test_support::temp_storage;

    #[test]
    fn test_no_budget_skips_prompt() {
        let (storage, _temp) = temp_storage();
        let user = storage.users.insert("alice", "h", "s").unwrap();
        let mut console = scripted(&[]);

        allocate_budget(&mut console, &storage, &Settings::default(), user).unwrap();

        let out = output(console);
        assert!(out.contains("No budget created."));
        assert!(!out.contains("Enter a positive amount"));
    }

    #[test]
    fn test_allocate_amount() {
        let (storage, _temp) = temp_storage();
        let user = storage.users.insert("alice", "h", "s").unwrap();
        let share = |name: &str, value: f64| CategoryShare::new(name, Percentage::new(value).unwrap());
        let budget = Budget::new(
            3000.0,
            2,
            vec![share("Rent", 50.0), share("Food", 20.0), share("Savings", 30.0)],
        );
        BudgetService::new(&storage).replace(user, &budget).unwrap();
        let mut console = scripted(&["-5", "500"]);

        allocate_budget(&mut console, &storage, &Settings::default(), user).unwrap();

        let out = output(console);
        assert!(out.contains("Please enter a positive value."));
        assert!(out.contains("Total Amount: $500.00"));
        assert!(out.contains("Rent: 50.00% - $250.00"));
        assert!(out.contains("Food: 20.00% - $100.00"));
        assert!(out.contains("Savings: 30.00% - $150.00"));
    }
}
