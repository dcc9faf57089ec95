//! File logging through log4rs.
//!
//! The terminal belongs to the game while it runs, so log records only ever
//! go to a file, and only when a path is configured.

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Handle,
};

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} {t} {m}{n}";

/// Build the log4rs config for a file appender at `file_path`.
pub fn file_config(level: LevelFilter, file_path: &str) -> Result<Config> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(file_path)
        .with_context(|| format!("failed to open log file {file_path}"))?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .context("invalid log configuration")?;
    Ok(config)
}

/// Install the global logger. Can only succeed once per process.
pub fn init_log(level: LevelFilter, file_path: &str) -> Result<Handle> {
    let config = file_config(level, file_path)?;
    log4rs::init_config(config).context("logger already installed")
}
