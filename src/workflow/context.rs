//! Workflow context
//!
//! This module defines the state collected over a single run.

use crate::config::RenameOptions;
use crate::path_gen::PlannedRename;

/// Context for the workflow
///
/// Holds the options the run was started with, the rename plan and the
/// statistics gathered while executing it.
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// The resolved options
    pub options: RenameOptions,
    /// Statistics about the processing
    pub stats: WorkflowStats,
    /// Every planned rename, in listing order
    pub planned_renames: Vec<PlannedRename>,
}

/// Statistics about the workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of files found below the root directory
    pub files_found: usize,
    /// Number of files actually renamed
    pub files_renamed: usize,
    /// Number of files whose new path equals the old one
    pub files_skipped: usize,
}

impl WorkflowContext {
    pub fn new(options: RenameOptions) -> Self {
        WorkflowContext {
            options,
            stats: WorkflowStats::default(),
            planned_renames: Vec::new(),
        }
    }

    /// Whether the run only previews the renames
    pub fn is_dry_run(&self) -> bool {
        self.options.dry_run
    }

    /// Stores the rename plan and counts the files it covers
    pub fn set_plan(&mut self, plan: Vec<PlannedRename>) {
        self.stats.files_found = plan.len();
        self.planned_renames = plan;
    }

    /// Increments the number of files renamed
    pub fn increment_files_renamed(&mut self) {
        self.stats.files_renamed += 1;
    }

    /// Increments the number of files skipped
    pub fn increment_files_skipped(&mut self) {
        self.stats.files_skipped += 1;
    }
}
