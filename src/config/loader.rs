//! Settings file loading
//!
//! This module locates and parses the optional YAML settings file.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_yaml::from_str;

use crate::constants::DEFAULT_CONFIG_FILE;
use crate::errors::{Result, config_parsing_error, file_operation_error};
use crate::utils::{expand_home, find_project_folder};

use super::model::Settings;

/// Loads settings from a YAML file
///
/// An empty file yields the default settings.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid settings YAML
pub fn load_settings(file: &Path) -> Result<Settings> {
    let content = fs::read_to_string(file)
        .map_err(|e| file_operation_error(e, file.to_path_buf(), "read settings"))?;

    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    from_str(&content).map_err(|e| config_parsing_error(e, &file.display().to_string()))
}

/// Path of the settings file in the platform configuration directory
pub fn default_settings_path() -> Option<PathBuf> {
    find_project_folder().map(|folder| folder.config_dir().join(DEFAULT_CONFIG_FILE))
}

/// Reads the settings for this run
///
/// An explicitly requested file must exist. Without one, the file in the
/// platform configuration directory is used when present, and the built-in
/// defaults otherwise.
///
/// # Errors
/// Returns an error if a settings file exists but cannot be loaded
pub fn read_settings(explicit: Option<&str>) -> Result<Settings> {
    match explicit {
        Some(path) => load_settings(&expand_home(path)),
        None => match default_settings_path() {
            Some(path) if path.is_file() => {
                debug!("Using settings file {}", path.display());
                load_settings(&path)
            }
            _ => Ok(Settings::default()),
        },
    }
}
