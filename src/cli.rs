use clap::{Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description};

use crate::constants::{
    CONFIG_HELP, DIRECTORY_HELP, DRY_RUN_HELP, LOG_FILE_HELP, PREFIX_HELP, VERBOSE_HELP,
};
use crate::logging::LogLevel;

/// Values taken from the command line, before settings file defaults are merged in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArguments {
    /// Raw directory argument, quotes not yet stripped
    pub directory: Option<String>,
    pub prefix: Option<String>,
    pub dry_run: bool,
    /// Number of `-v` flags given
    pub verbose: u8,
    pub log_file: Option<String>,
    pub config: Option<String>,
}

impl CliArguments {
    /// Extracts the arguments from parsed command-line matches
    pub fn from_matches(matches: &ArgMatches) -> Self {
        CliArguments {
            directory: matches.get_one::<String>("directory").cloned(),
            prefix: matches.get_one::<String>("prefix").cloned(),
            dry_run: matches.get_flag("dry_run"),
            verbose: matches.get_count("verbose"),
            log_file: matches.get_one::<String>("log_file").cloned(),
            config: matches.get_one::<String>("config").cloned(),
        }
    }

    /// Gets the verbosity level requested with `-v`, if any
    ///
    /// Returns `None` when no `-v` flag was given so that a settings file
    /// can still choose the level.
    pub fn verbosity(&self) -> Option<LogLevel> {
        (self.verbose > 0).then(|| LogLevel::from_occurrences(self.verbose))
    }
}

/// Builds the command-line interface definition
///
/// Defines the following arguments:
/// - `directory`: Root directory to process
/// - `prefix`: String inserted between the base name and the number
/// - `dry_run`: Preview without renaming anything
/// - `config`: Path to a YAML settings file
/// - `log_file`: Additional log file
/// - `verbose`: Increase verbosity level
///
/// `directory` is not marked required; a missing directory has to exit with
/// status 1, which `main` reports itself.
pub fn build_command() -> Command {
    let arg_directory = Arg::new("directory")
        .short('d')
        .long("directory")
        .value_name("PATH")
        .help(DIRECTORY_HELP)
        .allow_hyphen_values(true);

    // prefixes such as "-v" must not be mistaken for flags
    let arg_prefix = Arg::new("prefix")
        .short('p')
        .long("prefix")
        .value_name("PREFIX")
        .help(PREFIX_HELP)
        .allow_hyphen_values(true);

    let arg_dry = Arg::new("dry_run")
        .short('n')
        .long("dryRun")
        .visible_alias("dry-run")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .help(CONFIG_HELP);

    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("FILE")
        .help(LOG_FILE_HELP);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .arg(arg_directory)
        .arg(arg_prefix)
        .arg(arg_dry)
        .arg(arg_config)
        .arg(arg_log_file)
        .arg(arg_verbose)
}

/// Parses the process arguments
///
/// Help and version requests print and exit with status 0. Any other
/// argument error is printed and exits with status 1.
pub fn get_arguments() -> CliArguments {
    match build_command().try_get_matches() {
        Ok(matches) => CliArguments::from_matches(&matches),
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1)
        }
    }
}
