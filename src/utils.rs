use std::path::PathBuf;

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};

/// Removes one surrounding quote character from each end of a path argument
///
/// Either end is stripped independently, so `"C:\files"`, `'dir'` and even a
/// stray `"dir` all lose their quotes. Quotes inside the value are kept.
pub fn strip_surrounding_quotes(value: &str) -> String {
    static QUOTES_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"^['"]|['"]$"#).expect("Failed to compile regex pattern for QUOTES_RE")
    });
    QUOTES_RE.replace_all(value, "").to_string()
}

/// Expands a leading `~` to the user's home directory
pub fn expand_home(value: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(value).into_owned())
}

/// Locates the platform configuration folder without creating it
pub(crate) fn find_project_folder() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}
