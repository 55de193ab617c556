//! Income step
//!
//! Collects the monthly income and how many paychecks it arrives in.

use std::io::{BufRead, Write};

use crate::cli::console::Console;
use crate::error::PaysplitResult;

/// Income step result
pub struct IncomeStepResult {
    /// Total monthly income
    pub income: f64,
    /// Paychecks received per month
    pub paychecks: u32,
}

/// Income step
pub struct IncomeStep;

impl IncomeStep {
    /// Run the income step
    pub fn run<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
    ) -> PaysplitResult<IncomeStepResult> {
        let income = console.prompt_positive_amount("Enter your total monthly income: ")?;
        let paychecks =
            console.prompt_positive_count("How many paychecks do you receive per month? ")?;

        Ok(IncomeStepResult { income, paychecks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::console::test_support::{output, scripted};

    #[test]
    fn test_income_step() {
        let mut console = scripted(&["3000", "2"]);
        let result = IncomeStep::run(&mut console).unwrap();

        assert_eq!(result.income, 3000.0);
        assert_eq!(result.paychecks, 2);
    }

    #[test]
    fn test_income_step_reprompts() {
        let mut console = scripted(&["lots", "0", "2500.50", "two", "-1", "4"]);
        let result = IncomeStep::run(&mut console).unwrap();

        assert_eq!(result.income, 2500.5);
        assert_eq!(result.paychecks, 4);

        let out = output(console);
        assert!(out.contains("Invalid input. Please enter a number."));
        assert!(out.contains("Please enter a positive value."));
        assert!(out.contains("Invalid input. Please enter an integer."));
        assert!(out.contains("Please enter a positive integer."));
    }
}
