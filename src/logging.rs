use color_eyre::Result;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;

const LOG_FILE: &str = "homerail.log";

/// Parses a configured level, `info` when unrecognised
#[must_use]
pub fn level_filter(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or(LevelFilter::INFO)
}

/// Routes `tracing` output to `<dir>/homerail.log` so it never draws over the TUI.
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init(dir: &Path, level: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level_filter(level))
        .try_init()
        .map_err(|error| color_eyre::eyre::eyre!("Failed to install logger: {error}"))?;

    Ok(guard)
}
