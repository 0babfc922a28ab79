use std::process::ExitCode;

use anyhow::{Context, Result};
use human_panic::setup_panic;
use log::debug;

use seqrename::prelude::*;

fn main() -> ExitCode {
    setup_panic!();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let arguments = get_arguments();

    // nothing touches the filesystem before the directory is known
    if arguments.directory.as_deref().is_none_or(str::is_empty) {
        return Err(usage_error("--directory option is required").into());
    }

    let settings = read_settings(arguments.config.as_deref()).context("Failed to load settings")?;

    let log_options = LogOptions::resolve(&arguments, &settings);
    if let Err(e) = init_logger(log_options.verbosity, &log_options.log_file) {
        eprintln!("Failed to initialise logger: {e}");
    }

    let options = RenameOptions::resolve(&arguments, &settings)?;
    debug!("Resolved options: {options:?}");

    let context = rename_files(options)?;
    debug!("Run statistics: {:?}", context.stats);

    Ok(())
}
