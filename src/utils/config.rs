//! Application configuration constants.
//! Default sets and package-derived names in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    config_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                config_filename: format!(".{pkg}.toml"),
            }
        })
    }

    /// Per-directory config file name (e.g. `.cleancode.toml`).
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }
}

// ---- Output ----

/// Output artifact name used when no output path is given (resolved against the cwd).
pub const OUTPUT_FILENAME: &str = "clean_code_output.txt";

/// Label written before each file's path in the output artifact.
pub const HEADER_LABEL: &str = "Full Path: ";

/// Notice emitted first when a candidate file cannot be read.
pub const READ_FAILURE_NOTICE: &str = "Could not read";

// ---- Default sets ----

/// Suffixes that make a file a candidate. Plain `ends_with` match: `json` and `tsx`
/// carry no leading dot, so `abcjson` is a candidate too.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".java", ".ts", ".cpp", ".cs", ".html", ".css", ".mjs", "json", "tsx",
];

/// Substrings that exclude a directory (and its subtree) when found anywhere in its path.
pub const DEFAULT_EXCLUDE: &[&str] = &["node_modules", ".git", "__pycache__"];

/// Prefixes that mark a whole line as a comment once whitespace is trimmed.
pub const DEFAULT_COMMENT_MARKERS: &[&str] = &["#", "//"];

/// Whole-line `/* ... */` comment, matched against the trimmed line.
pub const BLOCK_COMMENT_PATTERN: &str = r"^\s*/\*.*\*/\s*$";

pub fn default_extensions() -> Vec<String> {
    to_owned_vec(DEFAULT_EXTENSIONS)
}

pub fn default_exclude() -> Vec<String> {
    to_owned_vec(DEFAULT_EXCLUDE)
}

pub fn default_comment_markers() -> Vec<String> {
    to_owned_vec(DEFAULT_COMMENT_MARKERS)
}

fn to_owned_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
