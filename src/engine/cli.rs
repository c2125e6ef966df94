//! CLI command handler: layer defaults, `.cleancode.toml` and flags, then extract.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::Path;

use crate::Opts;
use crate::engine::arg_parser::Cli;
use crate::extract::extract_dir_with_opts;
use crate::utils::cleancode_toml::{apply_file_to_opts, cleancode_toml_path, load_cleancode_toml};
use crate::utils::setup_logging;

/// Defaults, then config file, then CLI flags. Sets up logging once verbosity is known.
fn setup_opts(cli: &Cli, root: &Path) -> Opts {
    let file = load_cleancode_toml(root);
    let file_verbose = match &file {
        Some(Ok(f)) => f.verbose(),
        _ => None,
    };
    setup_logging(cli.verbose.or(file_verbose).unwrap_or(false));

    let mut opts = Opts::default();
    match file {
        Some(Ok(f)) => {
            debug!("Loaded {}", cleancode_toml_path(root).display());
            apply_file_to_opts(&f, &mut opts);
        }
        Some(Err(e)) => warn!("{}: {}", cleancode_toml_path(root).display(), e),
        None => {}
    }
    apply_cli_to_opts(cli, &mut opts);
    opts
}

/// Flags override file and defaults. `--exclude` extends, `--ext` replaces.
fn apply_cli_to_opts(cli: &Cli, opts: &mut Opts) {
    if let Some(ref out) = cli.output {
        opts.output_path = Some(out.clone());
    }
    if !cli.extensions.is_empty() {
        opts.extensions = cli.extensions.clone();
    }
    opts.exclude.extend(cli.exclude.iter().cloned());
    if let Some(v) = cli.verbose {
        opts.verbose = v;
    }
}

/// Run one extraction and log the summary.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let root = cli.root().context("resolve current directory")?;
    let opts = setup_opts(cli, &root);
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );
    let summary = extract_dir_with_opts(&root, &opts)?;
    info!(
        "Extracted {} lines from {} of {} files ({} lines dropped)",
        summary.lines_kept, summary.extracted, summary.candidates, summary.lines_dropped
    );
    Ok(())
}
