//! Public and internal types for the cleancode API and pipeline.

use std::path::PathBuf;

use crate::utils::config::{default_comment_markers, default_exclude, default_extensions};

/// A candidate file that could not be read. The run continues past it.
#[derive(Clone, Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    /// Display text of the underlying I/O or decoding error.
    pub error: String,
}

/// Counters for one extraction run.
#[derive(Clone, Debug, Default)]
pub struct Summary {
    /// Candidate files seen (a header was written for each).
    pub candidates: usize,
    /// Candidate files read successfully.
    pub extracted: usize,
    /// Lines written to the output artifact.
    pub lines_kept: usize,
    /// Blank and comment lines filtered out.
    pub lines_dropped: usize,
    /// Candidate files that could not be read.
    pub skipped: Vec<SkippedFile>,
    /// Directories the walk could not list: (path if known, error).
    pub walk_errors: Vec<(Option<PathBuf>, String)>,
}

/// Lib-only options for [`extract_dir`](crate::extract_dir). Defaults match the CLI defaults.
#[derive(Clone, Debug)]
pub struct ExtractOpts {
    /// Filename suffixes that make a file a candidate (plain `ends_with`).
    pub extensions: Vec<String>,
    /// Substrings that exclude a directory subtree when found in its path.
    pub exclude: Vec<String>,
    /// Whole-line comment prefixes.
    pub comment_markers: Vec<String>,
}

impl Default for ExtractOpts {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: default_exclude(),
            comment_markers: default_comment_markers(),
        }
    }
}

impl From<&ExtractOpts> for Opts {
    fn from(o: &ExtractOpts) -> Self {
        Opts {
            output_path: None,
            extensions: o.extensions.clone(),
            exclude: o.exclude.clone(),
            comment_markers: o.comment_markers.clone(),
            verbose: false,
        }
    }
}

/// Full options (CLI and config file). Use [`ExtractOpts`] for lib.
#[derive(Clone, Debug)]
pub struct Opts {
    /// Output artifact path. When None, uses `OUTPUT_FILENAME` in the cwd.
    pub output_path: Option<PathBuf>,
    pub extensions: Vec<String>,
    pub exclude: Vec<String>,
    pub comment_markers: Vec<String>,
    /// Debug logging and a file counter on stderr.
    pub verbose: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Opts::from(&ExtractOpts::default())
    }
}
