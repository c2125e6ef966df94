//! Engine module: CLI, line classification, filters

pub mod arg_parser;
pub mod classify;
pub mod cli;
pub mod progress;
pub mod tools;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use classify::LineClassifier;
pub use cli::handle_run;
pub use tools::{
    check_root_is_dir, display_file_name, is_excluded_dir, is_output_artifact, matches_extension,
    resolve_output_path,
};
