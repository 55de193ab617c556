//! Login menu
//!
//! Loops over {login, create account, exit} until a login succeeds or the
//! user asks to leave.

use std::io::{BufRead, Write};

use crate::cli::console::Console;
use crate::error::PaysplitResult;
use crate::models::UserId;
use crate::services::AuthService;
use crate::storage::Storage;

/// How the login menu ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(UserId),
    Exit,
}

/// Login menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginChoice {
    Login,
    CreateAccount,
    Exit,
}

impl LoginChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Login),
            "2" => Some(Self::CreateAccount),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the login menu until a user is authenticated or exit is chosen
pub fn run_login<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
) -> PaysplitResult<LoginOutcome> {
    let auth = AuthService::new(storage);

    loop {
        console.say("-----------------------------------")?;
        console.say("Please select an option:")?;
        console.say("1. Login as existing user")?;
        console.say("2. Create User")?;
        console.say("0. Exit")?;

        let selection = console.read_line()?;

        match LoginChoice::parse(&selection) {
            Some(LoginChoice::Login) => {
                let username = console.prompt("Enter username: ")?;
                let password = console.prompt_secret("Enter password: ")?;

                match auth.authenticate(&username, &password) {
                    Ok(Some(user_id)) => {
                        console.say("Login successful.")?;
                        return Ok(LoginOutcome::Authenticated(user_id));
                    }
                    Ok(None) => console.say("Login failed. Try again.")?,
                    Err(e) if e.is_recoverable() => {
                        console.say(format!("Error verifying user: {}", e))?;
                        console.say("Login failed. Try again.")?;
                    }
                    Err(e) => return Err(e),
                }
            }
            Some(LoginChoice::CreateAccount) => {
                let username = console.prompt("Enter username: ")?;
                let password = console.prompt_secret("Enter password: ")?;

                match auth.create_account(&username, &password) {
                    Ok(_) => console.say("User added successfully.")?,
                    Err(e) if e.is_recoverable() => {
                        console.say(format!("Error inserting user: {}", e))?
                    }
                    Err(e) => return Err(e),
                }
            }
            Some(LoginChoice::Exit) => {
                console.say("Goodbye.")?;
                return Ok(LoginOutcome::Exit);
            }
            None => console.say("Please enter a valid option.")?,
        }
    }
}
