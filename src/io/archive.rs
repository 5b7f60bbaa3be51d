//! Bundling an output tree into a single archive file.
//!
//! The pipeline only needs a "bundle this directory" capability, expressed as
//! the [`Archiver`] trait. [`ZipArchiver`] is the built-in implementation.
//!
//! ## Layout
//! - The archive is written next to the root, named after it:
//!   `out/run1` becomes `out/run1.zip`. It never lands inside the tree it
//!   bundles, and the tree itself is left untouched.
//! - Entry names are relative to the root with `/` separators; directories
//!   are stored as `name/` entries.
//! - Entries are added in [`TreeWalk`] order, so the archive's listing matches
//!   the trace produced by [`crate::io::tree::log_tree`].

use crate::error::ArchiveError;
use crate::io::tree::TreeWalk;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Pluggable archive format.
pub trait Archiver: Send + Sync {
    /// Human-readable format name (e.g., "zip").
    fn name(&self) -> &str;

    /// File extension without the leading dot.
    fn extension(&self) -> &str;

    /// Bundle the whole subtree of `root`, returning the archive path.
    ///
    /// # Errors
    /// Any failure to read the tree or write the archive.
    fn bundle(&self, root: &Path) -> Result<PathBuf, ArchiveError>;
}

/// Sibling path of `root` with `.<extension>` appended to its final component.
///
/// # Errors
/// Returns [`ArchiveError::NoFileName`] when `root` has no final component
/// (e.g. `/` or `..`).
pub fn archive_path_for(root: &Path, extension: &str) -> Result<PathBuf, ArchiveError> {
    let name = root
        .file_name()
        .ok_or_else(|| ArchiveError::NoFileName(root.display().to_string()))?;
    let mut file_name = name.to_os_string();
    file_name.push(".");
    file_name.push(extension);
    Ok(root.with_file_name(file_name))
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> ArchiveError + '_ {
    move |source| ArchiveError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// ZIP archiver.
#[derive(Debug, Clone, Copy)]
pub struct ZipArchiver {
    method: CompressionMethod,
}

impl ZipArchiver {
    /// Deflate-compressed entries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            method: CompressionMethod::Deflated,
        }
    }

    /// Uncompressed entries.
    #[must_use]
    pub fn stored() -> Self {
        Self {
            method: CompressionMethod::Stored,
        }
    }
}

impl Default for ZipArchiver {
    fn default() -> Self {
        Self::new()
    }
}

impl Archiver for ZipArchiver {
    fn name(&self) -> &str {
        "zip"
    }

    fn extension(&self) -> &str {
        "zip"
    }

    fn bundle(&self, root: &Path) -> Result<PathBuf, ArchiveError> {
        let target = archive_path_for(root, self.extension())?;
        let options = SimpleFileOptions::default().compression_method(self.method);

        // List the tree before creating the archive file.
        let entries = TreeWalk::new(root)
            .and_then(|walk| walk.collect::<io::Result<Vec<_>>>())
            .map_err(io_err(root))?;

        let file = File::create(&target).map_err(io_err(&target))?;
        let mut zip = ZipWriter::new(BufWriter::new(file));
        for entry in &entries {
            let name = entry.archive_name();
            if entry.is_dir() {
                zip.add_directory(name, options)?;
            } else {
                zip.start_file(name, options)?;
                let mut src = File::open(&entry.path).map_err(io_err(&entry.path))?;
                io::copy(&mut src, &mut zip).map_err(io_err(&entry.path))?;
            }
        }
        let mut out = zip.finish()?;
        out.flush().map_err(io_err(&target))?;

        debug!(entries = entries.len(), archive = %target.display(), "archive written");
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_sits_next_to_root() {
        assert_eq!(
            archive_path_for(Path::new("out/run1"), "zip").unwrap(),
            PathBuf::from("out/run1.zip")
        );
        assert_eq!(
            archive_path_for(Path::new("out/run.v2/"), "zip").unwrap(),
            PathBuf::from("out/run.v2.zip")
        );
        assert!(matches!(
            archive_path_for(Path::new("/"), "zip"),
            Err(ArchiveError::NoFileName(_))
        ));
    }
}
