//! Output artifact writer: path headers and filtered lines, one block per candidate file.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::engine::classify::LineClassifier;
use crate::utils::config::HEADER_LABEL;

/// Lines written and dropped for one file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineCounts {
    pub kept: usize,
    pub dropped: usize,
}

/// Read a candidate file as UTF-8 text. Any failure (open, permissions, invalid UTF-8) is
/// returned to the caller, which skips the file.
pub fn read_candidate(path: &Path) -> std::io::Result<String> {
    std::fs::read_to_string(path)
}

/// Split after `\n`, `\r\n` or a lone `\r`, keeping each line's ending. A final line without an
/// ending is yielded as is.
pub fn lines_with_endings(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let bytes = rest.as_bytes();
        let end = match bytes.iter().position(|&b| b == b'\n' || b == b'\r') {
            None => rest.len(),
            Some(i) if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') => i + 2,
            Some(i) => i + 1,
        };
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}

/// Sole writer of the output artifact. Write-only; blocks are written whole, in call order.
pub struct OutputWriter<W: Write> {
    out: W,
}

impl OutputWriter<BufWriter<File>> {
    /// Create or truncate `path`. Failure here is fatal for the run.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("create output file {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> OutputWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// `\nFull Path: <path>\n`
    pub fn write_header(&mut self, path: &Path) -> Result<()> {
        write!(self.out, "\n{}{}\n", HEADER_LABEL, path.display()).context("write header")
    }

    /// Write each accepted line of `content` verbatim, original line ending included.
    pub fn write_filtered(
        &mut self,
        content: &str,
        classifier: &LineClassifier,
    ) -> Result<LineCounts> {
        let mut counts = LineCounts::default();
        for line in lines_with_endings(content) {
            if classifier.is_code_line(line) {
                self.out
                    .write_all(line.as_bytes())
                    .context("write extracted line")?;
                counts.kept += 1;
            } else {
                counts.dropped += 1;
            }
        }
        Ok(counts)
    }

    /// Flush and hand back the inner writer.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush().context("flush output file")?;
        Ok(self.out)
    }
}
