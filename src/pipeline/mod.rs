//! Pipeline components: tree walk, output writer, error reporting.

pub mod error_handler;
pub mod walk;
pub mod writer;

pub use error_handler::{
    read_failure_records, report_read_failure, report_skipped, report_walk_error,
};
pub use walk::{DirGroup, DirGroups, WalkOutcome, to_outcome_walkdir, walk_dirs};
pub use writer::{LineCounts, OutputWriter, lines_with_endings, read_candidate};
