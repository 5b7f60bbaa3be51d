//! Reading written tables back for assertions.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Deserialize every row of a headered CSV table.
///
/// # Errors
/// Fails if the file cannot be opened or a row does not decode as `T`; the
/// message names the 1-based data row.
pub fn read_table<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("open {}", path.display()))?;
    reader
        .deserialize()
        .enumerate()
        .map(|(i, row)| row.with_context(|| format!("row {} of {}", i + 1, path.display())))
        .collect()
}
