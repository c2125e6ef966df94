//! Path and filter utilities

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::Opts;
use crate::utils::config::OUTPUT_FILENAME;

/// True if `file_name` ends with any configured suffix. Plain string suffix, not a dotted extension.
pub fn matches_extension(file_name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
}

/// True if the directory's full path contains any exclusion substring (case-sensitive).
pub fn is_excluded_dir(dir: &Path, exclude_patterns: &[String]) -> bool {
    if exclude_patterns.is_empty() {
        return false;
    }
    let path_str = dir.to_string_lossy();
    exclude_patterns
        .iter()
        .any(|pattern| path_str.contains(pattern.as_str()))
}

/// True if `path` is the output artifact itself. Only canonicalizes when the file names agree.
pub fn is_output_artifact(path: &Path, output_canonical: &Option<PathBuf>) -> bool {
    let Some(out) = output_canonical else {
        return false;
    };
    if path.file_name() != out.file_name() {
        return false;
    }
    path.canonicalize().map(|p| &p == out).unwrap_or(false)
}

/// Output path from opts, or the package default in the current directory.
pub fn resolve_output_path(opts: &Opts) -> PathBuf {
    opts.output_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(OUTPUT_FILENAME))
}

/// Fail early when the root cannot be walked at all.
pub fn check_root_is_dir(root: &Path) -> Result<()> {
    let meta = std::fs::metadata(root)
        .with_context(|| format!("read root metadata for {}", root.display()))?;
    if !meta.is_dir() {
        anyhow::bail!("Not a directory: {}", root.display());
    }
    Ok(())
}

/// Bare file name for diagnostics, falling back to the whole path.
pub fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
