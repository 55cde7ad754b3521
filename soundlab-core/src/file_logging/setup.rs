use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};
use std::path::Path;

/// `soundlab_<command>_<timestamp>.log`
pub fn log_file_name(command: &str, timestamp: &str) -> String {
    format!("soundlab_{command}_{timestamp}.log")
}

/// Installs a log4rs logger writing everything at `log_level` to `log_file`,
/// with warnings and errors mirrored to stderr.
///
/// Must be called at most once per process, before any other logger.
pub fn setup_file_logging(log_file: &Path, log_level: LevelFilter) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build(log_file)
        .with_context(|| format!("opening log file {}", log_file.display()))?;

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("[{l}] {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Warn)))
                .build("stderr", Box::new(stderr_appender)),
        )
        .build(
            Root::builder()
                .appender("file")
                .appender("stderr")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;

    Ok(())
}
