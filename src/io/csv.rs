//! CSV table output.
//!
//! [`write_csv_vec`] writes a typed slice with a header row taken from the
//! `Serialize` field names, creating parent directories on demand. The
//! column order of a written table is the field order of `T`.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::BufWriter;
use std::path::Path;

/// Write a typed slice to a CSV file.
///
/// * Creates parent directories if they don't exist; directories that already
///   exist (including ones created concurrently) are not an error.
/// * Emits a header row when `has_headers` is `true`.
///
/// # Returns
/// The number of rows written (i.e., `data.len()`).
///
/// # Errors
/// Returns an error if the file/dirs cannot be created or any row fails to
/// serialize/flush.
pub fn write_csv_vec<T: Serialize>(
    path: impl AsRef<Path>,
    has_headers: bool,
    data: &[T],
) -> Result<usize> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent).with_context(|| format!("mkdir -p {}", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut wtr = WriterBuilder::new()
        .has_headers(has_headers)
        .from_writer(BufWriter::new(f));
    for (i, row) in data.iter().enumerate() {
        wtr.serialize(row)
            .with_context(|| format!("serialize CSV row #{}", i + 1))?;
    }
    wtr.flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(data.len())
}
