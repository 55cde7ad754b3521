// ============================================================================
// soundlab-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console and Optional File Logging
//
// Without --log-dir the CLI logs through env_logger, honouring RUST_LOG
// (default "info", "debug" with --verbose). With --log-dir it installs
// soundlab-core's log4rs configuration instead, which writes a timestamped
// log file and mirrors warnings and errors to stderr. Only one global
// logger can exist per process, so exactly one of the two is installed.

use crate::error::CliResult;
use log::LevelFilter;
use soundlab_core::CoreError;
use soundlab_core::file_logging::{log_file_name, setup_file_logging};
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the process logger. Returns the log file path when file
/// logging was requested.
pub fn init_logging(
    command: &str,
    verbose: bool,
    log_dir: Option<&Path>,
) -> CliResult<Option<PathBuf>> {
    let level = level_for(verbose);

    match log_dir {
        Some(dir) => {
            let log_path = dir.join(log_file_name(command, &get_timestamp()));
            setup_file_logging(&log_path, level).map_err(|e| {
                CoreError::OperationFailed(format!("Failed to set up file logging: {e:#}"))
            })?;
            log::debug!("Logging to {}", log_path.display());
            Ok(Some(log_path))
        }
        None => {
            let default_filter = if verbose { "debug" } else { "info" };
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
                .format_timestamp(None)
                .format_target(false)
                .init();
            Ok(None)
        }
    }
}
