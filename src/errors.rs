use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the sequential renamer
#[derive(Debug)]
pub enum Error {
    /// The command line was missing something required
    Usage { message: String },
    /// The root directory does not exist
    DirectoryNotFound { path: PathBuf },
    /// The root path exists but is not a directory
    NotADirectory { path: PathBuf },
    /// An entry below the root could not be read while walking the tree
    DirectoryWalk {
        source: walkdir::Error,
        path: PathBuf,
    },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to settings file parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage { message } => write!(f, "{message}"),
            Error::DirectoryNotFound { path } => {
                write!(f, "Directory not found: {}", path.display())
            }
            Error::NotADirectory { path } => {
                write!(f, "Not a directory: {}", path.display())
            }
            Error::DirectoryWalk { path, .. } => {
                write!(f, "Failed to list {}", path.display())
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Configuration parsing error: {detail}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::DirectoryWalk { source, .. } => Some(source),
            Error::FileOperation { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Custom Result type for the sequential renamer
///
/// # Examples
/// ```
/// use seqrename::prelude::{Result, usage_error};
///
/// fn require(value: Option<&str>) -> Result<&str> {
///     value.ok_or_else(|| usage_error("--directory option is required"))
/// }
///
/// assert!(require(None).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a usage error
pub fn usage_error(message: &str) -> Error {
    Error::Usage {
        message: message.to_string(),
    }
}

/// Helper function to create a directory not found error
pub fn directory_not_found_error(path: PathBuf) -> Error {
    Error::DirectoryNotFound { path }
}

/// Helper function to create a not-a-directory error
pub fn not_a_directory_error(path: PathBuf) -> Error {
    Error::NotADirectory { path }
}

/// Helper function to create a directory walk error
///
/// The path is taken from the walker error when it carries one, falling back
/// to the root being walked.
pub fn directory_walk_error(err: walkdir::Error, root: PathBuf) -> Error {
    let path = err.path().map(|p| p.to_path_buf()).unwrap_or(root);
    Error::DirectoryWalk { source: err, path }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}
