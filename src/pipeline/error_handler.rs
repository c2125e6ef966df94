use log::warn;
use std::path::Path;

use crate::Summary;
use crate::engine::tools::display_file_name;
use crate::utils::config::READ_FAILURE_NOTICE;

/// The per-file diagnostic: fixed notice, bare file name, error text.
pub fn read_failure_records(path: &Path, err: &std::io::Error) -> [String; 3] {
    [
        READ_FAILURE_NOTICE.to_string(),
        display_file_name(path),
        err.to_string(),
    ]
}

/// Emit [`read_failure_records`] as separate warnings.
pub fn report_read_failure(path: &Path, err: &std::io::Error) {
    for record in read_failure_records(path, err) {
        warn!("{}", record);
    }
}

/// Walk error (directory could not be listed). Never fatal.
pub fn report_walk_error(msg: &str, path: Option<&Path>) {
    match path {
        Some(p) => warn!("Cannot read directory {}: {}", p.display(), msg),
        None => warn!("Walk error: {}", msg),
    }
}

/// End-of-run recap of everything that was skipped. Per-path detail only when verbose.
pub fn report_skipped(summary: &Summary, verbose: bool) {
    let files = summary.skipped.len();
    let dirs = summary.walk_errors.len();
    if files + dirs == 0 {
        return;
    }
    warn!(
        "Skipped {} unreadable files and {} unreadable directories",
        files, dirs
    );
    if verbose {
        for s in &summary.skipped {
            eprintln!("  skipped: {} ({})", s.path.display(), s.error);
        }
        for (p, msg) in &summary.walk_errors {
            match p {
                Some(p) => eprintln!("  skipped dir: {} ({})", p.display(), msg),
                None => eprintln!("  skipped: {}", msg),
            }
        }
    }
}
