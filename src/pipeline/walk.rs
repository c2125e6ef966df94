//! Tree walk: yields each non-excluded directory with the file names directly inside it.

use log::debug;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::engine::tools::is_excluded_dir;

/// One directory and the names of the non-directory entries directly inside it.
#[derive(Clone, Debug)]
pub struct DirGroup {
    pub dir: PathBuf,
    pub files: Vec<OsString>,
}

impl DirGroup {
    fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            files: Vec::new(),
        }
    }
}

/// One result from the walk: a directory group, or an error with optional path.
#[derive(Debug)]
pub enum WalkOutcome {
    Dir(DirGroup),
    Err { msg: String, path: Option<PathBuf> },
}

/// Convert a walkdir error into [`WalkOutcome`].
pub fn to_outcome_walkdir(err: walkdir::Error) -> WalkOutcome {
    WalkOutcome::Err {
        msg: format!("{}", err),
        path: err.path().map(PathBuf::from),
    }
}

/// Files before subdirectories, each by name. Every directory's files then arrive right after the
/// directory itself, which is what [`DirGroups`] relies on.
fn files_first(a: &DirEntry, b: &DirEntry) -> std::cmp::Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Walk `root` top-down. A directory (root included) whose path contains any `exclude` substring is
/// neither entered nor reported. Symlinks are not followed: links to directories are dropped, other
/// links are reported as files.
pub fn walk_dirs(
    root: &Path,
    exclude: &[String],
) -> DirGroups<impl Iterator<Item = walkdir::Result<DirEntry>> + use<>> {
    let exclude = exclude.to_vec();
    let inner = WalkDir::new(root)
        .follow_links(false)
        .sort_by(files_first)
        .into_iter()
        .filter_entry(move |e| {
            !(e.file_type().is_dir() && is_excluded_dir(e.path(), &exclude))
        });
    DirGroups {
        inner,
        pending: None,
    }
}

/// Groups a files-first depth-first walk into one [`DirGroup`] per directory.
pub struct DirGroups<I> {
    inner: I,
    pending: Option<DirGroup>,
}

impl<I> Iterator for DirGroups<I>
where
    I: Iterator<Item = walkdir::Result<DirEntry>>,
{
    type Item = WalkOutcome;

    fn next(&mut self) -> Option<WalkOutcome> {
        loop {
            match self.inner.next() {
                None => return self.pending.take().map(WalkOutcome::Dir),
                Some(Err(err)) => return Some(to_outcome_walkdir(err)),
                Some(Ok(entry)) if entry.file_type().is_dir() => {
                    let next = DirGroup::new(entry.into_path());
                    if let Some(done) = self.pending.replace(next) {
                        return Some(WalkOutcome::Dir(done));
                    }
                }
                Some(Ok(entry)) if entry.path_is_symlink() && entry.path().is_dir() => {
                    debug!("Not following directory link {}", entry.path().display());
                }
                Some(Ok(entry)) => {
                    if let Some(group) = self.pending.as_mut() {
                        group.files.push(entry.file_name().to_os_string());
                    }
                }
            }
        }
    }
}
