//! Temporary file management utilities.
//!
//! Every cut or export works inside its own uniquely named directory. The
//! directory is a `tempfile::TempDir`, so it is removed when dropped even if
//! the request fails part-way; [`cleanup_temp_dir`] closes it explicitly so
//! removal errors can be logged.

use crate::config::CoreConfig;
use crate::error::CoreResult;
use std::path::{Path, PathBuf};
use tempfile::{Builder as TempFileBuilder, TempDir};

/// Creates a temporary directory with prefix under the configured temp
/// directory, or the system one. Auto-cleaned when dropped.
pub fn create_temp_dir(config: &CoreConfig, prefix: &str) -> CoreResult<TempDir> {
    let temp_base_dir = config
        .temp_dir
        .clone()
        .unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&temp_base_dir)?;

    let dir = TempFileBuilder::new()
        .prefix(prefix)
        .tempdir_in(&temp_base_dir)?;
    log::debug!("Created working directory {}", dir.path().display());
    Ok(dir)
}

/// Returns a temporary file path with random suffix. Does not create the file.
pub fn create_temp_file_path(dir: &Path, prefix: &str, extension: &str) -> PathBuf {
    use rand::distributions::Alphanumeric;
    use rand::{Rng, thread_rng};

    let random_suffix: String = thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();

    let filename = if extension.is_empty() {
        format!("{prefix}_{random_suffix}")
    } else {
        format!("{prefix}_{random_suffix}.{extension}")
    };
    dir.join(filename)
}

/// Removes a working directory. Failures are logged and swallowed.
pub fn cleanup_temp_dir(dir: TempDir) {
    let path = dir.path().to_path_buf();
    match dir.close() {
        Ok(()) => log::debug!("Removed working directory {}", path.display()),
        Err(e) => log::warn!(
            "Failed to remove working directory {}: {}",
            path.display(),
            e
        ),
    }
}
