//! Main menu shown after login

use std::io::{BufRead, Write};

use crate::cli::allocate::allocate_budget;
use crate::cli::console::Console;
use crate::cli::view::view_budget;
use crate::config::Settings;
use crate::editor::BudgetEditor;
use crate::error::PaysplitResult;
use crate::models::UserId;
use crate::storage::Storage;

/// Main menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Allocate,
    Edit,
    View,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Allocate),
            "2" => Some(Self::Edit),
            "3" => Some(Self::View),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the main menu for `user_id` until exit is chosen
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
    settings: &Settings,
    user_id: UserId,
) -> PaysplitResult<()> {
    let editor = BudgetEditor::new(storage, settings);

    loop {
        console.say("")?;
        console.say("-----------------------------------")?;
        console.say("Please select an option:")?;
        console.say("1. Budget a paycheck")?;
        console.say("2. Enter/Edit Budget Information")?;
        console.say("3. View Budget Information")?;
        console.say("4. Exit")?;

        let selection = console.read_line()?;

        match MenuChoice::parse(&selection) {
            Some(MenuChoice::Allocate) => allocate_budget(console, storage, settings, user_id)?,
            Some(MenuChoice::Edit) => {
                editor.run(console, user_id)?;
            }
            Some(MenuChoice::View) => view_budget(console, storage, settings, user_id)?,
            Some(MenuChoice::Exit) => {
                console.say("Goodbye.")?;
                return Ok(());
            }
            None => console.say("Please enter a valid option.")?,
        }
    }
}
