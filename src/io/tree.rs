//! Sorted, depth-first directory traces.
//!
//! [`TreeWalk`] is a lazy iterator over a `walkdir` walk: each directory is
//! listed (and sorted by name) only when the walk descends into it. [`log_tree`] drives a walk to
//! completion and emits one log line per entry, indented by depth. The
//! archiver walks the tree with the same iterator, so a trace taken before
//! archiving lists exactly the archive's entries.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

/// Whether a tree entry is a directory or anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// One entry yielded by [`TreeWalk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// 0 for direct children of the root.
    pub depth: usize,
    pub kind: EntryKind,
    /// Full path on disk.
    pub path: PathBuf,
    /// Path relative to the walk root.
    pub relative: PathBuf,
}

impl TreeEntry {
    /// Final path component.
    #[must_use]
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// `/`-separated relative path, with a trailing `/` for directories.
    #[must_use]
    pub fn archive_name(&self) -> String {
        let mut name = self
            .relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        if self.is_dir() {
            name.push('/');
        }
        name
    }
}

/// Lazy depth-first walk of a directory, children sorted by name.
///
/// Symbolic links are reported as files and never followed.
pub struct TreeWalk {
    root: PathBuf,
    inner: walkdir::IntoIter,
}

impl TreeWalk {
    /// Start a walk below `root` (the root itself is not yielded).
    ///
    /// # Errors
    /// Returns an error if `root` is missing or not a directory.
    pub fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !fs::metadata(&root)?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} is not a directory", root.display()),
            ));
        }
        let inner = WalkDir::new(&root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();
        Ok(Self { root, inner })
    }
}

impl Iterator for TreeWalk {
    type Item = io::Result<TreeEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = match self.inner.next()? {
            Ok(entry) => entry,
            Err(e) => return Some(Err(e.into())),
        };
        // min_depth(1): direct children of the root sit at walkdir depth 1
        let depth = entry.depth() - 1;
        let kind = if entry.file_type().is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::File
        };
        let path = entry.into_path();
        let relative = path
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.clone());
        Some(Ok(TreeEntry {
            depth,
            kind,
            path,
            relative,
        }))
    }
}

/// Render one trace line: tabs for depth, a `[DIR]`/`[FILE]` marker, the name.
#[must_use]
pub fn trace_line(entry: &TreeEntry) -> String {
    let marker = match entry.kind {
        EntryKind::Dir => "[DIR]",
        EntryKind::File => "[FILE]",
    };
    format!("{}{marker} {}", "\t".repeat(entry.depth), entry.name())
}

/// Log the full tree below `root`, returning the number of entries traced.
///
/// # Errors
/// Returns the first I/O error hit while listing.
pub fn log_tree(root: impl AsRef<Path>) -> io::Result<usize> {
    let root = root.as_ref();
    info!(root = %root.display(), "output tree");
    let mut count = 0usize;
    for entry in TreeWalk::new(root)? {
        let entry = entry?;
        info!("{}", trace_line(&entry));
        count += 1;
    }
    Ok(count)
}
