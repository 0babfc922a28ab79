//! Configuration data structures
//!
//! This module contains the settings file model and the fully resolved
//! options a run is executed with.

use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArguments;
use crate::errors::{Result, usage_error};
use crate::logging::LogLevel;
use crate::utils::{expand_home, strip_surrounding_quotes};

/// Defaults read from a YAML settings file
///
/// Every field is optional; anything given on the command line wins.
/// The directory to process is intentionally absent: it always comes from
/// the command line.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Prefix inserted between the base name and the sequence number
    #[serde(default)]
    pub prefix: Option<String>,
    /// Preview renames without touching the filesystem
    #[serde(default)]
    pub dry_run: bool,
    /// Log verbosity
    #[serde(default)]
    pub verbosity: Option<LogLevel>,
    /// File to append log records to
    #[serde(default)]
    pub log_file: Option<String>,
}

/// Options a single run is executed with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    /// Root directory, quotes stripped and `~` expanded
    pub directory: PathBuf,
    /// Prefix inserted between the base name and the sequence number
    pub prefix: String,
    /// Whether to only print the plan
    pub dry_run: bool,
}

impl RenameOptions {
    pub fn new(directory: impl Into<PathBuf>, prefix: &str, dry_run: bool) -> Self {
        RenameOptions {
            directory: directory.into(),
            prefix: prefix.to_string(),
            dry_run,
        }
    }

    /// Resolves the run options from the command line and the settings file
    ///
    /// # Errors
    /// Returns a usage error if no directory was given on the command line
    pub fn resolve(arguments: &CliArguments, settings: &Settings) -> Result<Self> {
        let raw_directory = arguments
            .directory
            .as_deref()
            .filter(|directory| !directory.is_empty())
            .ok_or_else(|| usage_error("--directory option is required"))?;
        let directory = expand_home(&strip_surrounding_quotes(raw_directory));

        let prefix = arguments
            .prefix
            .as_deref()
            .or(settings.prefix.as_deref())
            .unwrap_or_default();

        Ok(RenameOptions::new(
            directory,
            prefix,
            arguments.dry_run || settings.dry_run,
        ))
    }
}

/// Logging options after merging the command line with the settings file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    pub verbosity: LogLevel,
    /// Empty when no log file should be written
    pub log_file: String,
}

impl LogOptions {
    pub fn resolve(arguments: &CliArguments, settings: &Settings) -> Self {
        LogOptions {
            verbosity: arguments
                .verbosity()
                .or(settings.verbosity)
                .unwrap_or_default(),
            log_file: arguments
                .log_file
                .clone()
                .or_else(|| settings.log_file.clone())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arguments(directory: Option<&str>) -> CliArguments {
        CliArguments {
            directory: directory.map(str::to_string),
            ..CliArguments::default()
        }
    }

    #[test]
    fn test_missing_directory_is_a_usage_error() {
        let result = RenameOptions::resolve(&arguments(None), &Settings::default());
        let error = result.unwrap_err();
        assert_eq!(format!("{error}"), "--directory option is required");
    }

    #[test]
    fn test_empty_directory_is_a_usage_error() {
        let result = RenameOptions::resolve(&arguments(Some("")), &Settings::default());
        assert!(matches!(result, Err(crate::errors::Error::Usage { .. })));
    }

    #[test]
    fn test_directory_quotes_are_stripped() {
        let options =
            RenameOptions::resolve(&arguments(Some(r#""C:\files""#)), &Settings::default())
                .unwrap();
        assert_eq!(options.directory, PathBuf::from(r"C:\files"));
    }

    #[test]
    fn test_defaults_without_settings() {
        let options =
            RenameOptions::resolve(&arguments(Some("/tmp/x")), &Settings::default()).unwrap();
        assert_eq!(options, RenameOptions::new("/tmp/x", "", false));
    }

    #[test]
    fn test_command_line_prefix_wins() {
        let mut cli = arguments(Some("/tmp/x"));
        cli.prefix = Some("-v".to_string());
        let settings = Settings {
            prefix: Some("_file".to_string()),
            ..Settings::default()
        };

        let options = RenameOptions::resolve(&cli, &settings).unwrap();
        assert_eq!(options.prefix, "-v");
    }

    #[test]
    fn test_settings_supply_defaults() {
        let settings = Settings {
            prefix: Some("_file".to_string()),
            dry_run: true,
            ..Settings::default()
        };

        let options = RenameOptions::resolve(&arguments(Some("/tmp/x")), &settings).unwrap();
        assert_eq!(options.prefix, "_file");
        assert!(options.dry_run);
    }

    #[test]
    fn test_log_options_merge() {
        let settings = Settings {
            verbosity: Some(LogLevel::Warning),
            log_file: Some("from-settings.log".to_string()),
            ..Settings::default()
        };

        let from_settings = LogOptions::resolve(&arguments(None), &settings);
        assert_eq!(from_settings.verbosity, LogLevel::Warning);
        assert_eq!(from_settings.log_file, "from-settings.log");

        let mut cli = arguments(None);
        cli.verbose = 1;
        cli.log_file = Some("cli.log".to_string());
        let from_cli = LogOptions::resolve(&cli, &settings);
        assert_eq!(from_cli.verbosity, LogLevel::Debug);
        assert_eq!(from_cli.log_file, "cli.log");

        let defaults = LogOptions::resolve(&arguments(None), &Settings::default());
        assert_eq!(defaults.verbosity, LogLevel::Info);
        assert!(defaults.log_file.is_empty());
    }
}
