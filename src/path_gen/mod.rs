//! Path generation module
//!
//! This module contains components for generating the numbered destination paths.

mod numbering;

pub use numbering::{PlannedRename, numbered_path, plan_renames};
