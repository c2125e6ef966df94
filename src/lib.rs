//! Cleancode: extract comment-free, blank-free source lines from a directory tree into one file

pub mod engine;
pub mod extract;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

use log::debug;
use std::path::Path;

/// Result alias used by public cleancode API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: extract every candidate file under `root` into `output` and return the run [`Summary`].
///
/// `output` is created or truncated before the walk starts; failing to create it is the only
/// setup error besides `root` not being a directory. Unreadable candidate files are skipped
/// and listed in [`Summary::skipped`], they never abort the run.
///
/// ```ignore
/// let summary = cleancode::extract_dir(Path::new("src"), Path::new("code.txt"), &ExtractOpts::default())?;
/// println!("{} lines from {} files", summary.lines_kept, summary.extracted);
/// ```
pub fn extract_dir(root: &Path, output: &Path, opts: &ExtractOpts) -> Result<Summary> {
    let mut opts = Opts::from(opts);
    opts.output_path = Some(output.to_path_buf());
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );
    extract::extract_dir_with_opts(root, &opts)
}
