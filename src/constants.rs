/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name used to locate the platform configuration directory.
pub const APPLICATION: &str = "seqrename";

/// Name of the settings file looked up in the configuration directory
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Help text for the directory command-line option
pub const DIRECTORY_HELP: &str = "Path to the directory containing files to rename";

/// Help text for the prefix command-line option
pub const PREFIX_HELP: &str = "Custom prefix to add before the number";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Preview changes without modifying files";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read default settings from a specific YAML file";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log records to this file";

/// Separator printed between the old and the new path of a rename
pub const RENAME_ARROW: &str = "→";
