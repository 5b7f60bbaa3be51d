//! Error types for the seams of the pipeline.
//!
//! Orchestration code works in `anyhow::Result`; the types here name the
//! conditions callers may want to match on: an unavailable record source
//! (fatal), a failed archive write (fatal), and a malformed UTC offset
//! (row-scoped, recovered by the flattener).

use thiserror::Error;

/// The record source could not supply a batch.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Network, HTTP status, or payload decoding failure.
    #[error("record source {url} unavailable: {reason}")]
    Unavailable { url: String, reason: String },
}

/// Bundling the output tree into an archive failed.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The output root has no final path component to name the archive after.
    #[error("cannot derive an archive name from {0}")]
    NoFileName(String),

    /// I/O error while walking the tree or writing the archive
    #[error("archive I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// ZIP encoder error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// A `±HH:MM` UTC offset that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OffsetError {
    #[error("empty offset")]
    Empty,

    #[error("malformed offset '{0}'")]
    Malformed(String),

    #[error("offset '{0}' out of range")]
    OutOfRange(String),
}
