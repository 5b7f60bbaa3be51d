use anyhow::Result;
use clap::Parser;
use roster_beam::config::{Gender, RunConfig, DEFAULT_BASE_FILENAME};
use roster_beam::logging;
use roster_beam::pipeline::RosterPipeline;
use roster_beam::source::{RandomUserSource, DEFAULT_BATCH_SIZE, DEFAULT_SOURCE_URL};
use roster_beam::writer::ExecMode;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::error;

/// Download synthetic people, partition them by birth decade and country,
/// and archive the result.
#[derive(Parser, Debug)]
#[command(name = "roster-beam", version, about)]
struct Cli {
    /// Output folder; regenerated on every run
    #[arg(long, env = "ROSTER_DESTINATION")]
    destination: PathBuf,

    /// Base name of the unfiltered dump (`<destination>/<filename>.csv`)
    #[arg(long, default_value = DEFAULT_BASE_FILENAME)]
    filename: String,

    /// Keep only rows of this gender
    #[arg(long, value_enum)]
    gender: Option<Gender>,

    /// Keep only the first N rows after the gender filter (N <= 0 keeps all)
    #[arg(long, allow_negative_numbers = true)]
    rows: Option<i64>,

    /// Number of records to request
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Provider endpoint
    #[arg(long, default_value = DEFAULT_SOURCE_URL)]
    source_url: String,

    /// Whole-request timeout for the download, in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Write partitions on a rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Append log lines to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Logging level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(default_value = "INFO")]
    log_level: String,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        let mut cfg = RunConfig::new(&self.destination).with_batch_size(self.batch_size);
        cfg.base_filename = self.filename.clone();
        cfg.gender = self.gender;
        cfg.max_rows = self.rows;
        if self.parallel {
            cfg = cfg.with_exec_mode(ExecMode::Parallel { threads: None });
        }
        cfg
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init(&cli.log_level, cli.log_file.as_deref()) {
        eprintln!("roster-beam: {err:#}");
        return ExitCode::from(2);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("run failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let source = RandomUserSource::new(&cli.source_url, Duration::from_secs(cli.timeout_secs));
    RosterPipeline::new(cli.run_config(), source).run()?;
    Ok(())
}
