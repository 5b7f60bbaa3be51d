//! End-to-end run: fetch, flatten, filter, format, partition, write, trace, archive.
//!
//! Every stage consumes the previous stage's complete output; nothing
//! streams and nothing re-enters an earlier stage. All paths derive from
//! [`RunConfig::destination`]; the process working directory is never used.

use crate::config::RunConfig;
use crate::dates::format_dates;
use crate::flatten::flatten_records;
use crate::io::archive::{archive_path_for, Archiver, ZipArchiver};
use crate::io::csv::write_csv_vec;
use crate::io::tree::log_tree;
use crate::partition::partition_rows;
use crate::source::RecordSource;
use crate::writer::{clear_partitions, write_partitions};
use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use std::fs::{canonicalize, create_dir_all};
use std::path::PathBuf;
use tracing::info;

/// Counters and paths describing one completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub fetched: usize,
    pub after_filter: usize,
    /// Rows dropped because no birth year could be derived.
    pub undated: usize,
    /// Rows dropped by the birth-year cutoff.
    pub before_cutoff: usize,
    pub partitioned_rows: usize,
    pub partitions_written: usize,
    pub partitions_skipped: usize,
    /// Entries in the pre-archive tree trace.
    pub traced_entries: usize,
    pub dump_path: PathBuf,
    pub partition_files: Vec<PathBuf>,
    pub archive_path: PathBuf,
}

/// One configured pipeline run over a record source.
pub struct RosterPipeline<S> {
    config: RunConfig,
    source: S,
    archiver: Box<dyn Archiver>,
    now: DateTime<Utc>,
}

impl<S: RecordSource> RosterPipeline<S> {
    /// Pipeline with a ZIP archiver and "now" captured at construction.
    pub fn new(config: RunConfig, source: S) -> Self {
        Self {
            config,
            source,
            archiver: Box::new(ZipArchiver::new()),
            now: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_archiver(mut self, archiver: Box<dyn Archiver>) -> Self {
        self.archiver = archiver;
        self
    }

    /// Pin the reference time used for local times and registration ages.
    #[must_use]
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    #[must_use]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Execute the run.
    ///
    /// # Errors
    /// Fatal conditions: the source is unavailable (nothing is written), a
    /// table cannot be written, or the archive cannot be produced. An
    /// unusable archive location is reported before any table is written.
    pub fn run(&self) -> Result<RunSummary> {
        let cfg = &self.config;
        let root = &cfg.destination;
        info!(destination = %root.display(), "run started");

        let raws = self
            .source
            .fetch(cfg.batch_size)
            .with_context(|| format!("fetch records from {}", self.source.describe()))?;
        info!(records = raws.len(), "records downloaded");

        let mut summary = RunSummary {
            fetched: raws.len(),
            ..RunSummary::default()
        };

        create_dir_all(root).with_context(|| format!("mkdir -p {}", root.display()))?;
        // `out/..` or `.` has no usable final component until resolved
        let resolved = canonicalize(root).with_context(|| format!("resolve {}", root.display()))?;
        archive_path_for(&resolved, self.archiver.extension()).with_context(|| {
            format!("{} archive of {}", self.archiver.name(), resolved.display())
        })?;
        let cleared = clear_partitions(root)?;
        if cleared > 0 {
            info!(directories = cleared, "previous partitions removed");
        }

        let rows = flatten_records(&raws, self.now);
        drop(raws);
        summary.dump_path = cfg.dump_path();
        write_csv_vec(&summary.dump_path, true, &rows)?;
        info!(path = %summary.dump_path.display(), rows = rows.len(), "unfiltered dump saved");

        let rows = cfg.row_filter().apply(rows);
        summary.after_filter = rows.len();

        let formatted = format_dates(rows);
        summary.undated = formatted.undated;

        let partitioned = partition_rows(formatted.rows, cfg.cutoff_year);
        summary.before_cutoff = partitioned.before_cutoff;
        summary.partitioned_rows = partitioned.total_rows();

        let report = write_partitions(
            root,
            &partitioned.partitions,
            self.now.year(),
            cfg.exec_mode,
        )?;
        summary.partitions_written = report.files.len();
        summary.partitions_skipped = report.skipped;
        summary.partition_files = report.files;

        summary.traced_entries =
            log_tree(root).with_context(|| format!("trace {}", root.display()))?;

        summary.archive_path = self
            .archiver
            .bundle(&resolved)
            .with_context(|| {
                format!("{} archive of {}", self.archiver.name(), resolved.display())
            })?;
        info!(archive = %summary.archive_path.display(), "archived output tree");

        info!(
            summary = %serde_json::to_string(&summary).unwrap_or_default(),
            "run finished"
        );
        Ok(summary)
    }
}

/// Run with a ZIP archiver and the current time.
///
/// # Errors
/// See [`RosterPipeline::run`].
pub fn run<S: RecordSource>(config: RunConfig, source: S) -> Result<RunSummary> {
    RosterPipeline::new(config, source).run()
}
