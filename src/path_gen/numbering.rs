//! Sequential name generation
//!
//! Builds the numbered destination path for each discovered file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::discovery::FileEntry;

/// A single planned rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    /// 1-based position of the file in listing order
    pub number: usize,
    pub source: PathBuf,
    pub target: PathBuf,
}

impl PlannedRename {
    /// Whether the rename would leave the path unchanged
    pub fn is_noop(&self) -> bool {
        self.source == self.target
    }
}

/// Generates the numbered path for a file
///
/// The new file name is `stem + prefix + number + extension`, kept in the
/// same directory. The extension is whatever follows the last `.` of the
/// file name, so `archive.tar.gz` keeps `.gz` and a dot file such as
/// `.bashrc` has no extension at all.
///
/// A path without a file name is returned unchanged.
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use seqrename::path_gen::numbered_path;
///
/// let new_path = numbered_path(Path::new("/tmp/x/sub/b.txt"), 2, "-v");
/// assert_eq!(new_path, PathBuf::from("/tmp/x/sub/b-v2.txt"));
/// ```
pub fn numbered_path(original: &Path, number: usize, prefix: &str) -> PathBuf {
    let Some(stem) = original.file_stem() else {
        return original.to_path_buf();
    };

    let mut new_name = OsString::from(stem);
    new_name.push(prefix);
    new_name.push(number.to_string());
    if let Some(extension) = original.extension() {
        new_name.push(".");
        new_name.push(extension);
    }

    original.with_file_name(new_name)
}

/// Numbers the files in listing order, starting at 1
pub fn plan_renames(files: &[FileEntry], prefix: &str) -> Vec<PlannedRename> {
    files
        .iter()
        .enumerate()
        .map(|(index, file)| {
            let number = index + 1;
            PlannedRename {
                number,
                source: file.path.clone(),
                target: numbered_path(&file.path, number, prefix),
            }
        })
        .collect()
}
