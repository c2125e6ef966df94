//! Load `.cleancode.toml` from the scanned directory (CLI only). Lib callers pass
//! [`ExtractOpts`](crate::ExtractOpts) directly.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::Opts;
use crate::utils::config::PackagePaths;

#[derive(Debug, Deserialize)]
pub(crate) struct CleancodeToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    output: Option<String>,
    extensions: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    comment_markers: Option<Vec<String>>,
    verbose: Option<bool>,
}

/// Parse config text. Errors are returned so callers decide whether to warn or fail.
pub(crate) fn parse_cleancode_toml(s: &str) -> Result<CleancodeToml, toml::de::Error> {
    toml::from_str(s)
}

/// Path of the config file for `dir`.
pub(crate) fn cleancode_toml_path(dir: &Path) -> PathBuf {
    dir.join(PackagePaths::get().config_filename())
}

/// Load the config file from `dir`. None if missing or unreadable; `Some(Err)` if malformed, so the
/// caller can warn once logging is up.
pub(crate) fn load_cleancode_toml(
    dir: &Path,
) -> Option<Result<CleancodeToml, toml::de::Error>> {
    let s = std::fs::read_to_string(cleancode_toml_path(dir)).ok()?;
    Some(parse_cleancode_toml(&s))
}

impl CleancodeToml {
    /// Verbose setting from the file; needed before logging is initialized.
    pub(crate) fn verbose(&self) -> Option<bool> {
        self.settings.verbose
    }
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($file:expr, $opts:expr, $file_field:ident => $opts_field:ident) => {
        if let Some(ref v) = $file.$file_field {
            $opts.$opts_field = v.clone();
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before applying CLI flags.
pub(crate) fn apply_file_to_opts(file: &CleancodeToml, opts: &mut Opts) {
    let s = &file.settings;
    if let Some(ref p) = s.output {
        opts.output_path = Some(PathBuf::from(p));
    }
    apply_file_opt!(s, opts, extensions => extensions);
    apply_file_opt!(s, opts, exclude => exclude);
    apply_file_opt!(s, opts, comment_markers => comment_markers);
    if let Some(v) = s.verbose {
        opts.verbose = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_only_present_fields() {
        let file = parse_cleancode_toml(
            r#"
            [settings]
            extensions = [".rs"]
            comment_markers = ["--"]
            "#,
        )
        .unwrap();
        let mut opts = Opts::default();
        apply_file_to_opts(&file, &mut opts);
        assert_eq!(opts.extensions, vec![".rs".to_string()]);
        assert_eq!(opts.comment_markers, vec!["--".to_string()]);
        assert_eq!(opts.exclude, crate::utils::config::default_exclude());
        assert!(opts.output_path.is_none());
        assert!(!opts.verbose);
    }

    #[test]
    fn test_output_and_verbose() {
        let file = parse_cleancode_toml(
            r#"
            [settings]
            output = "out/code.txt"
            verbose = true
            "#,
        )
        .unwrap();
        let mut opts = Opts::default();
        apply_file_to_opts(&file, &mut opts);
        assert_eq!(opts.output_path, Some(PathBuf::from("out/code.txt")));
        assert!(opts.verbose);
    }

    #[test]
    fn test_empty_file_keeps_defaults() {
        let file = parse_cleancode_toml("").unwrap();
        let mut opts = Opts::default();
        apply_file_to_opts(&file, &mut opts);
        assert_eq!(opts.extensions, crate::utils::config::default_extensions());
    }

    #[test]
    fn test_malformed_is_error() {
        assert!(parse_cleancode_toml("[settings]\nextensions = 3").is_err());
    }

    #[test]
    fn test_load_missing_is_none() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(load_cleancode_toml(dir.path()).is_none());
    }

    #[test]
    fn test_load_malformed_is_err() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(cleancode_toml_path(dir.path()), "not = [valid").unwrap();
        assert!(matches!(load_cleancode_toml(dir.path()), Some(Err(_))));
    }

    #[test]
    fn test_load_present() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            cleancode_toml_path(dir.path()),
            "[settings]\nverbose = true\n",
        )
        .unwrap();
        let file = load_cleancode_toml(dir.path()).unwrap().unwrap();
        assert_eq!(file.verbose(), Some(true));
    }
}
