//! Run configuration.
//!
//! [`RunConfig`] is what [`crate::pipeline::run`] consumes; the binary builds
//! it from command-line arguments, library users build it directly.

use crate::filter::RowFilter;
use crate::partition::BIRTH_YEAR_CUTOFF;
use crate::source::DEFAULT_BATCH_SIZE;
use crate::writer::ExecMode;
use clap::ValueEnum;
use std::path::PathBuf;

/// Default base name of the unfiltered dump.
pub const DEFAULT_BASE_FILENAME: &str = "output";

/// Genders accepted by the gender filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Everything one pipeline run needs besides its record source and archiver.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Output root; regenerated by every run.
    pub destination: PathBuf,
    /// The unfiltered dump is written to `<destination>/<base_filename>.csv`.
    pub base_filename: String,
    pub gender: Option<Gender>,
    /// Row cap; `<= 0` disables it.
    pub max_rows: Option<i64>,
    pub batch_size: usize,
    pub exec_mode: ExecMode,
    pub cutoff_year: i32,
}

impl RunConfig {
    #[must_use]
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            base_filename: DEFAULT_BASE_FILENAME.to_string(),
            gender: None,
            max_rows: None,
            batch_size: DEFAULT_BATCH_SIZE,
            exec_mode: ExecMode::Sequential,
            cutoff_year: BIRTH_YEAR_CUTOFF,
        }
    }

    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    #[must_use]
    pub fn with_max_rows(mut self, n: i64) -> Self {
        self.max_rows = Some(n);
        self
    }

    #[must_use]
    pub fn with_batch_size(mut self, n: usize) -> Self {
        self.batch_size = n;
        self
    }

    #[must_use]
    pub fn with_exec_mode(mut self, mode: ExecMode) -> Self {
        self.exec_mode = mode;
        self
    }

    /// Filters derived from this configuration.
    #[must_use]
    pub fn row_filter(&self) -> RowFilter {
        RowFilter {
            gender: self.gender.map(|g| g.as_str().to_string()),
            max_rows: self.max_rows,
        }
    }

    /// `<destination>/<base_filename>.csv`
    #[must_use]
    pub fn dump_path(&self) -> PathBuf {
        self.destination.join(format!("{}.csv", self.base_filename))
    }
}
