//! Line classification: decide whether one line of a source file is code.

use anyhow::{Context, Result};
use log::debug;
use regex::Regex;

use crate::utils::config::{BLOCK_COMMENT_PATTERN, default_comment_markers};

/// Accepts non-blank lines that are not whole-line comments.
///
/// Only whole lines are judged: `x = 1  # note` is code, and each line of a multi-line
/// `/* ... */` block is judged on its own (so most of them count as code).
#[derive(Clone, Debug)]
pub struct LineClassifier {
    markers: Vec<String>,
    block_comment: Regex,
}

impl LineClassifier {
    /// Build with the given single-line comment markers. Empty markers are dropped since they
    /// would prefix every line.
    pub fn new(markers: &[String]) -> Result<Self> {
        let markers: Vec<String> = markers
            .iter()
            .filter(|m| {
                let keep = !m.is_empty();
                if !keep {
                    debug!("Ignoring empty comment marker");
                }
                keep
            })
            .cloned()
            .collect();
        let block_comment =
            Regex::new(BLOCK_COMMENT_PATTERN).context("compile block comment pattern")?;
        Ok(Self {
            markers,
            block_comment,
        })
    }

    /// `#` and `//` markers.
    pub fn with_default_markers() -> Result<Self> {
        Self::new(&default_comment_markers())
    }

    /// True if `line` (as read, line ending included) should be written to the output.
    pub fn is_code_line(&self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() {
            return false;
        }
        if self.markers.iter().any(|m| line.starts_with(m.as_str())) {
            return false;
        }
        !self.block_comment.is_match(line)
    }
}
