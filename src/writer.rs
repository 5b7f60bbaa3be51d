//! Partition writer: one CSV table per partition, named by its statistics.
//!
//! Layout: `<root>/<decade>-th/<country>/max_age_*_avg_registered_*_popular_id_*.csv`.
//! Partitions share no state, so they can be written in parallel; directory
//! creation goes through `create_dir_all`, which treats a directory created
//! concurrently by a sibling partition as success. Decade directories left by
//! an earlier run are removed by [`clear_partitions`] before writing.

use crate::io::csv::write_csv_vec;
use crate::partition::Partition;
use crate::record::FlatRow;
use crate::stats::PartitionStats;
use anyhow::{Context, Result};
use std::fs::{create_dir_all, remove_dir_all};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

#[cfg(feature = "parallel-io")]
use rayon::prelude::*;

/// How partition files are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecMode {
    #[default]
    Sequential,
    /// Requires the `parallel-io` feature; falls back to sequential otherwise.
    Parallel { threads: Option<usize> },
}

/// Result of [`write_partitions`].
#[derive(Debug, Clone, Default)]
pub struct WriteReport {
    /// Written files, in partition order.
    pub files: Vec<PathBuf>,
    /// Partitions skipped because they had no rows.
    pub skipped: usize,
}

/// Whether a directory name is a decade label such as `1980-th`.
#[must_use]
pub fn is_decade_dir(name: &str) -> bool {
    name.strip_suffix("-th")
        .is_some_and(|decade| decade.parse::<i32>().is_ok_and(|d| d.rem_euclid(10) == 0))
}

/// Remove the decade directories a previous run left directly under `root`.
///
/// Other entries (dumps, unrelated files) are kept. A missing root is empty.
///
/// # Errors
/// Returns an error if `root` cannot be listed or a directory cannot be removed.
pub fn clear_partitions(root: &Path) -> Result<usize> {
    if !root.exists() {
        return Ok(0);
    }
    let mut removed = 0usize;
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("list {}", root.display()))?;
        let stale = entry.file_type().is_dir()
            && entry.file_name().to_str().is_some_and(is_decade_dir);
        if stale {
            remove_dir_all(entry.path())
                .with_context(|| format!("rm -r {}", entry.path().display()))?;
            debug!(path = %entry.path().display(), "removed previous partition directory");
            removed += 1;
        }
    }
    Ok(removed)
}

/// Compute the statistics of one partition and write its rows.
///
/// Returns `Ok(None)` for an empty partition, which is skipped rather than
/// producing a malformed file name. Only [`FlatRow`] columns are persisted.
///
/// # Errors
/// Returns an error if the directory or file cannot be created or written.
pub fn write_partition(
    root: &Path,
    partition: &Partition,
    current_year: i32,
) -> Result<Option<PathBuf>> {
    let key = partition.key();
    let Some(stats) = PartitionStats::compute(partition, current_year) else {
        warn!(decade = key.decade, country = %key.country, "empty partition skipped");
        return Ok(None);
    };

    let dir = root.join(key.relative_dir());
    create_dir_all(&dir).with_context(|| format!("mkdir -p {}", dir.display()))?;
    let path = dir.join(stats.file_name());

    let rows: Vec<&FlatRow> = partition.rows().iter().map(|r| &r.row).collect();
    write_csv_vec(&path, true, &rows)?;
    info!(path = %path.display(), rows = rows.len(), "saved partition");
    Ok(Some(path))
}

/// Write every partition under `root`.
///
/// # Errors
/// Returns the first write error; partitions are otherwise independent.
pub fn write_partitions(
    root: &Path,
    partitions: &[Partition],
    current_year: i32,
    mode: ExecMode,
) -> Result<WriteReport> {
    let outcomes: Vec<Option<PathBuf>> = match mode {
        ExecMode::Sequential => partitions
            .iter()
            .map(|p| write_partition(root, p, current_year))
            .collect::<Result<_>>()?,
        #[cfg(feature = "parallel-io")]
        ExecMode::Parallel { threads } => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads.unwrap_or(0))
                .build()
                .context("build partition writer pool")?;
            pool.install(|| {
                partitions
                    .par_iter()
                    .map(|p| write_partition(root, p, current_year))
                    .collect::<Result<Vec<_>>>()
            })?
        }
        #[cfg(not(feature = "parallel-io"))]
        ExecMode::Parallel { .. } => {
            warn!("parallel-io feature disabled; writing partitions sequentially");
            return write_partitions(root, partitions, current_year, ExecMode::Sequential);
        }
    };

    let mut report = WriteReport::default();
    for outcome in outcomes {
        match outcome {
            Some(path) => report.files.push(path),
            None => report.skipped += 1,
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decade_dirs_are_recognized() {
        assert!(is_decade_dir("1980-th"));
        assert!(is_decade_dir("2000-th"));
        assert!(!is_decade_dir("1985-th"));
        assert!(!is_decade_dir("output.csv"));
        assert!(!is_decade_dir("archive-th"));
        assert!(!is_decade_dir("-th"));
    }
}
