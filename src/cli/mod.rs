//! Interactive terminal session
//!
//! A session is the login menu followed by the main menu of the user who
//! logged in. Each flow reads and writes through a [`Console`].

pub mod allocate;
pub mod console;
pub mod login;
pub mod menu;
pub mod view;

pub use console::{Console, StdConsole};
pub use login::{run_login, LoginOutcome};
pub use menu::run_menu;

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::error::PaysplitResult;
use crate::storage::Storage;

/// Run login and then the main menu
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
    settings: &Settings,
) -> PaysplitResult<()> {
    match run_login(console, storage)? {
        LoginOutcome::Authenticated(user_id) => {
            log::debug!("User {} logged in", user_id);
            run_menu(console, storage, settings, user_id)
        }
        LoginOutcome::Exit => Ok(()),
    }
}
