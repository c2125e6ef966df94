//! Directory extraction: walk, filter, write

use anyhow::Result;
use kdam::Bar;
use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::engine::progress::{create_counter, finish_counter, update_counter};
use crate::engine::{
    LineClassifier, check_root_is_dir, is_output_artifact, matches_extension, resolve_output_path,
};
use crate::pipeline::{
    OutputWriter, WalkOutcome, read_candidate, report_read_failure, report_skipped,
    report_walk_error, walk_dirs,
};
use crate::{Opts, SkippedFile, Summary};

/// Per-run state threaded through the walk: the open output and the counters.
struct Extraction<'a, W: Write> {
    writer: OutputWriter<W>,
    classifier: &'a LineClassifier,
    summary: Summary,
    counter: Option<Bar>,
}

impl<W: Write> Extraction<'_, W> {
    /// Header, then the file's code lines. An unreadable file keeps its header, gets no lines,
    /// and is recorded in the summary.
    fn extract_file(&mut self, path: &Path) -> Result<()> {
        self.summary.candidates += 1;
        self.writer.write_header(path)?;
        match read_candidate(path) {
            Ok(content) => {
                let counts = self.writer.write_filtered(&content, self.classifier)?;
                self.summary.extracted += 1;
                self.summary.lines_kept += counts.kept;
                self.summary.lines_dropped += counts.dropped;
            }
            Err(err) => {
                report_read_failure(path, &err);
                self.summary.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    error: err.to_string(),
                });
            }
        }
        update_counter(&mut self.counter, 1);
        Ok(())
    }
}

/// Extract every candidate file under `root` into the output artifact named by `opts`.
///
/// The output is created (truncated) before the walk; that and a non-directory `root` are the
/// only setup failures. Write failures on the output abort the run. Unreadable files and
/// directories are skipped and reported.
pub fn extract_dir_with_opts(root: &Path, opts: &Opts) -> Result<Summary> {
    check_root_is_dir(root)?;
    let classifier = LineClassifier::new(&opts.comment_markers)?;
    let output_path = resolve_output_path(opts);
    let writer = OutputWriter::create(&output_path)?;
    let output_canonical: Option<PathBuf> = output_path.canonicalize().ok();
    debug!("Writing to {}", output_path.display());

    let mut run = Extraction {
        writer,
        classifier: &classifier,
        summary: Summary::default(),
        counter: opts.verbose.then(|| create_counter("Extracting")),
    };

    for outcome in walk_dirs(root, &opts.exclude) {
        match outcome {
            WalkOutcome::Dir(group) => {
                for name in &group.files {
                    if !matches_extension(&name.to_string_lossy(), &opts.extensions) {
                        continue;
                    }
                    let path = group.dir.join(name);
                    if is_output_artifact(&path, &output_canonical) {
                        debug!("Skipping output file {}", path.display());
                        continue;
                    }
                    run.extract_file(&path)?;
                }
            }
            WalkOutcome::Err { msg, path } => {
                report_walk_error(&msg, path.as_deref());
                run.summary.walk_errors.push((path, msg));
            }
        }
    }

    finish_counter(&mut run.counter);
    run.writer.finish()?;
    report_skipped(&run.summary, opts.verbose);
    Ok(run.summary)
}
