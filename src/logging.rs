//! Tracing subscriber setup for the binary.

use anyhow::{bail, Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Parse a verbosity name, case-insensitively.
///
/// Accepts `TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`, `OFF`, plus the aliases
/// `WARNING` and `CRITICAL`.
///
/// # Errors
/// Returns an error naming the unknown level.
pub fn parse_level(name: &str) -> Result<LevelFilter> {
    let level = match name.trim().to_ascii_uppercase().as_str() {
        "TRACE" => LevelFilter::TRACE,
        "DEBUG" => LevelFilter::DEBUG,
        "INFO" => LevelFilter::INFO,
        "WARN" | "WARNING" => LevelFilter::WARN,
        "ERROR" | "CRITICAL" => LevelFilter::ERROR,
        "OFF" => LevelFilter::OFF,
        other => bail!("unknown log level '{other}'"),
    };
    Ok(level)
}

/// Install the global subscriber.
///
/// `level` is the default directive; `RUST_LOG` still overrides it. With
/// `log_file`, lines are appended to that file without ANSI colors;
/// otherwise they go to stderr.
///
/// # Errors
/// Returns an error for an unknown level or an unopenable log file.
pub fn init(level: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(parse_level(level)?.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            let _ = builder.with_ansi(false).with_writer(Mutex::new(file)).try_init();
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_case_insensitive() {
        assert_eq!(parse_level("info").unwrap(), LevelFilter::INFO);
        assert_eq!(parse_level("Warning").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_level("CRITICAL").unwrap(), LevelFilter::ERROR);
        assert!(parse_level("loud").is_err());
    }
}
