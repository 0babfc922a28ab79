//! Recursively renames every file below a directory to a sequentially
//! numbered name, with an optional prefix and a dry-run preview.

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod logging;
pub mod path_gen;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{CliArguments, get_arguments};
    pub use crate::config::{LogOptions, RenameOptions, Settings, read_settings};
    pub use crate::errors::{
        config_parsing_error, directory_not_found_error, directory_walk_error,
        file_operation_error, not_a_directory_error, usage_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::workflow::{WorkflowContext, rename_files};
}
