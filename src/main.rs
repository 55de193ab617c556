use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

use paysplit::cli::{run_session, StdConsole};
use paysplit::config::{PaysplitPaths, Settings};
use paysplit::storage::Storage;
use paysplit::PaysplitError;

#[derive(Parser)]
#[command(
    name = "paysplit",
    version,
    about = "Terminal-based percentage budgeting",
    long_about = "paysplit keeps a monthly income, a paycheck count and a set of \
                  budget categories whose percentages add up to 100%, and shows \
                  how any paycheck or amount splits across them."
)]
struct Cli {
    /// Directory holding the settings file and the database
    #[arg(long, env = "PAYSPLIT_DATA_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[clap(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let paths = PaysplitPaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings
            .save(&paths)
            .context("Failed to write default settings")?;
    }
    log::debug!("Using data directory {}", paths.base_dir().display());

    let storage = Storage::open(&paths, &settings)?;
    if storage.was_created() {
        println!("Database not found. Creating new database...");
    } else {
        println!("Database found.");
    }

    let mut console = StdConsole::stdio();
    match run_session(&mut console, &storage, &settings) {
        Ok(()) => Ok(()),
        Err(PaysplitError::InputClosed) => {
            log::debug!("Input closed, leaving");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
