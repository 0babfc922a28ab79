//! Workflow engine
//!
//! This module runs the scan, plan and rename steps in order.

use std::fs::rename;
use std::io::{self, Write};
use std::path::PathBuf;

use log::debug;

use crate::config::RenameOptions;
use crate::constants::RENAME_ARROW;
use crate::discovery::scan_directory;
use crate::errors::{Result, file_operation_error};
use crate::logging::format_message;
use crate::path_gen::{PlannedRename, plan_renames};

use super::context::WorkflowContext;

/// Renames the files below the configured directory, reporting to stdout
///
/// See [`rename_files_with_output`].
pub fn rename_files(options: RenameOptions) -> Result<WorkflowContext> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    rename_files_with_output(options, &mut handle)
}

/// Renames the files below the configured directory
///
/// This function orchestrates the workflow steps:
/// 1. List every file below the directory, depth-first
/// 2. Number the files in listing order and build the new paths
/// 3. Either print the plan (dry run) or rename the files one by one
///
/// Renames happen strictly in listing order. The first failing rename aborts
/// the run; renames already done are not rolled back.
///
/// # Arguments
/// * `options` - The resolved run options
/// * `out` - Where progress and result lines are written
///
/// # Returns
/// * `Result<WorkflowContext>` - The plan and statistics of the run
///
/// # Errors
/// * Returns an error if the directory cannot be listed
/// * Returns an error if any rename fails
pub fn rename_files_with_output<W: Write>(
    options: RenameOptions,
    out: &mut W,
) -> Result<WorkflowContext> {
    let mut context = WorkflowContext::new(options);

    let files = scan_directory(&context.options.directory)?;
    context.set_plan(plan_renames(&files, &context.options.prefix));

    write_line(out, &format!("Found {} files to process", context.stats.files_found))?;

    if context.is_dry_run() {
        write_line(out, "\nDRY RUN MODE: No files will be modified")?;
        for planned in &context.planned_renames {
            write_line(out, &describe("Would rename", planned))?;
        }
        debug!("Dry run finished, {} renames planned", context.stats.files_found);
        return Ok(context);
    }

    for index in 0..context.planned_renames.len() {
        let planned = &context.planned_renames[index];
        if planned.is_noop() {
            debug!("Skipping {}, name is unchanged", planned.source.display());
            context.increment_files_skipped();
            continue;
        }

        debug!(
            "Renaming file #{}: {} -> {}",
            planned.number,
            planned.source.display(),
            planned.target.display()
        );
        rename(&planned.source, &planned.target)
            .map_err(|e| file_operation_error(e, planned.source.clone(), "rename"))?;
        write_line(out, &describe("Renamed", planned))?;
        context.increment_files_renamed();
    }

    let message = "\nFile renaming completed successfully!";
    write_line(
        out,
        &format_message(message, &format!("\x1B[32m{message}\x1B[0m")),
    )?;
    debug!(
        "Renamed {} of {} files",
        context.stats.files_renamed, context.stats.files_found
    );

    Ok(context)
}

fn describe(action: &str, planned: &PlannedRename) -> String {
    format!(
        "{action}: {} {RENAME_ARROW} {}",
        planned.source.display(),
        planned.target.display()
    )
}

fn write_line<W: Write>(out: &mut W, line: &str) -> Result<()> {
    writeln!(out, "{line}")
        .map_err(|e| file_operation_error(e, PathBuf::from("<output>"), "write to"))
}
