use clap::Parser;
use std::path::PathBuf;

/// Extract comment-free, blank-free source code from a directory tree into one text file.
#[derive(Clone, Parser)]
#[command(name = "cleancode")]
#[command(about = "Strip comment and blank lines from a source tree into one text file.")]
pub struct Cli {
    /// Directory to scan. Default: current directory.
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Output file. Default: `clean_code_output.txt` in the current directory.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Filename suffixes to extract (replaces the defaults). Plain suffix match: `json` also matches `abcjson`.
    #[arg(long = "ext", short = 'x', num_args = 1..)]
    pub extensions: Vec<String>,

    /// Extra directory substrings to skip, added to the defaults. Can specify multiple: -e target dist
    #[arg(long, short = 'e', num_args = 1..)]
    pub exclude: Vec<String>,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,
}

impl Cli {
    /// Root to scan: DIR if given, else the absolute current directory.
    pub fn root(&self) -> std::io::Result<PathBuf> {
        match &self.dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }
}
