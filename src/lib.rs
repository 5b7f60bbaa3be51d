//! # roster-beam
//!
//! A batch pipeline over synthetic-person records: fetch one batch from a
//! provider, flatten the nested records, filter, format dates, partition by
//! (birth decade, country), summarize each partition into its file name,
//! trace the output tree, and bundle it into an archive.
//!
//! ## Stages
//!
//! | Stage | Entry point |
//! |---|---|
//! | Source | [`source::RecordSource::fetch`] |
//! | Flattener | [`flatten::flatten_records`] |
//! | Filter | [`filter::RowFilter::apply`] |
//! | Date formatter | [`dates::format_dates`] |
//! | Partitioner | [`partition::partition_rows`] |
//! | Aggregator + writer | [`writer::write_partitions`] |
//! | Tree logger | [`io::tree::log_tree`] |
//! | Archiver | [`io::archive::Archiver::bundle`] |
//!
//! [`pipeline::RosterPipeline`] wires them together.
//!
//! ## Quick Start
//!
//! ```no_run
//! use roster_beam::config::{Gender, RunConfig};
//! use roster_beam::pipeline::RosterPipeline;
//! use roster_beam::source::RandomUserSource;
//! # use anyhow::Result;
//!
//! # fn main() -> Result<()> {
//! let config = RunConfig::new("out/people")
//!     .with_gender(Gender::Female)
//!     .with_max_rows(1000);
//! let summary = RosterPipeline::new(config, RandomUserSource::default()).run()?;
//! println!("{} partitions written", summary.partitions_written);
//! # Ok(())
//! # }
//! ```
//!
//! ## Output layout
//!
//! ```text
//! <destination>/<base>.csv
//! <destination>/<decade>-th/<country>/max_age_<n>_avg_registered_<n>_popular_id_<id>.csv
//! <destination>.zip
//! ```
//!
//! ## Feature Flags
//!
//! - `http-source` - [`source::RandomUserSource`] over `ureq`
//! - `parallel-io` - write partitions on a rayon pool ([`writer::ExecMode::Parallel`])

pub mod combiners;
pub mod config;
pub mod dates;
pub mod error;
pub mod filter;
pub mod flatten;
pub mod io;
pub mod logging;
pub mod partition;
pub mod pipeline;
pub mod record;
pub mod source;
pub mod stats;
pub mod testing;
pub mod writer;

pub use combiners::CombineFn;
pub use config::{Gender, RunConfig};
pub use error::{ArchiveError, OffsetError, SourceError};
pub use partition::{Partition, PartitionKey};
pub use pipeline::{run, RosterPipeline, RunSummary};
pub use record::{FlatRow, RawRecord};
pub use source::RecordSource;
pub use stats::PartitionStats;
