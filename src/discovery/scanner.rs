//! Directory scanning functionality
//!
//! This module walks a directory tree and lists every file below it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use walkdir::WalkDir;

use crate::errors::{
    Result, directory_not_found_error, directory_walk_error, file_operation_error,
    not_a_directory_error,
};

/// A file found during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// The path to the file, as reached from the scanned root
    pub path: PathBuf,
}

impl FileEntry {
    pub fn new(path: PathBuf) -> Self {
        FileEntry { path }
    }
}

/// Recursively scans a directory for files
///
/// Walks depth-first: siblings are visited in file-name order, and the
/// contents of a subdirectory are listed in place before the next sibling.
/// Every entry that is not a directory is returned, hidden files and special
/// files included. Symbolic links are followed.
///
/// # Arguments
/// * `directory` - The directory to scan
///
/// # Returns
/// * `Result<Vec<FileEntry>>` - The files found, in numbering order
///
/// # Errors
/// Returns an error if the root is missing or not a directory, or if any
/// entry below it cannot be read (including dangling links and link loops)
pub fn scan_directory(directory: &Path) -> Result<Vec<FileEntry>> {
    debug!("Scanning directory: {}", directory.display());

    let metadata = fs::metadata(directory).map_err(|e| match e.kind() {
        ErrorKind::NotFound => directory_not_found_error(directory.to_path_buf()),
        _ => file_operation_error(e, directory.to_path_buf(), "read"),
    })?;
    if !metadata.is_dir() {
        return Err(not_a_directory_error(directory.to_path_buf()));
    }

    let walker = WalkDir::new(directory)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| directory_walk_error(e, directory.to_path_buf()))?;
        if entry.file_type().is_dir() {
            trace!("Descending into {}", entry.path().display());
            continue;
        }
        files.push(FileEntry::new(entry.into_path()));
    }

    debug!("Found {} files in directory", files.len());

    Ok(files)
}
