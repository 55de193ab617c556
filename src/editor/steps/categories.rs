//! Categories step
//!
//! Reads category names and percentages into the draft until the user types
//! `done` with the total at exactly 100%.

use std::io::{BufRead, Write};

use crate::cli::console::Console;
use crate::editor::session::{category_name, AddOutcome, BudgetDraft};
use crate::error::PaysplitResult;

/// Word that ends category entry, matched case-insensitively
pub const DONE: &str = "done";

/// Categories step
pub struct CategoriesStep;

impl CategoriesStep {
    /// Run the categories step
    pub fn run<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
        draft: &mut BudgetDraft,
    ) -> PaysplitResult<()> {
        console.say("Enter budget categories and their percentages (they must total 100%):")?;

        loop {
            let category = console.prompt("Enter a category name (or type 'done' to finish): ")?;
            let category = category.trim();

            if category.eq_ignore_ascii_case(DONE) {
                match draft.finish() {
                    Ok(_) => return Ok(()),
                    Err(e) => {
                        console.say(e)?;
                        continue;
                    }
                }
            }

            let category = match category_name(category) {
                Ok(name) => name,
                Err(e) => {
                    console.say(e)?;
                    continue;
                }
            };

            let percentage =
                console.prompt_positive_amount(&format!("Enter the percentage for {}: ", category))?;

            match draft.add(category, percentage) {
                Ok(AddOutcome::Added { percentage, total }) => console.say(format!(
                    "Added {}: {} (Total: {:.2}%)",
                    category, percentage, total
                ))?,
                Ok(AddOutcome::Replaced {
                    previous,
                    percentage,
                    total,
                }) => console.say(format!(
                    "Updated {}: {} -> {} (Total: {:.2}%)",
                    category, previous, percentage, total
                ))?,
                Err(e) => console.say(e)?,
            }
        }
    }
}
