//! Configuration module
//!
//! This module contains components for loading settings and resolving the
//! options a run is executed with.

mod loader;
mod model;

pub use loader::{default_settings_path, load_settings, read_settings};
pub use model::{LogOptions, RenameOptions, Settings};
