//! Testing utilities for roster pipelines.
//!
//! - **Sources**: [`StaticSource`] and [`FailingSource`] stand in for the
//!   network so a full run can execute against a temporary directory.
//! - **Builders**: [`RawRecordBuilder`] constructs provider records fluently.
//! - **Fixtures**: [`sample_raw_records`] is a small batch that exercises every
//!   recoverable condition (bad offset, undated row, pre-cutoff row, id tie).
//! - **Tables**: [`read_table`] decodes a written CSV table for assertions.
//!
//! # Quick Start
//!
//! ```no_run
//! use roster_beam::config::RunConfig;
//! use roster_beam::pipeline::RosterPipeline;
//! use roster_beam::testing::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let dir = tempfile::tempdir()?;
//! let source = StaticSource::new(sample_raw_records());
//! let summary = RosterPipeline::new(RunConfig::new(dir.path().join("out")), source)
//!     .with_now(fixture_now())
//!     .run()?;
//! assert_eq!(summary.fetched, 8);
//! # Ok(())
//! # }
//! ```

pub mod builders;
pub mod fixtures;
pub mod sources;
pub mod tables;

pub use builders::RawRecordBuilder;
pub use fixtures::{fixture_now, sample_raw_records};
pub use sources::{FailingSource, StaticSource};
pub use tables::read_table;
