//! Command implementations for the CLI.
//!
//! Each submodule implements one subcommand. Requests are validated before
//! the ffmpeg/ffprobe availability check, so malformed input is reported
//! even on machines without the engine installed.

pub mod cut;
pub mod export;
pub mod probe;

use crate::error::{CliErrorContext, CliResult};

use soundlab_core::config::CoreConfigBuilder;
use soundlab_core::utils::file_extension;
use soundlab_core::{CoreConfig, CoreError};

use std::fs;
use std::path::{Path, PathBuf};

/// An input file read into memory, with its canonical path and extension.
#[derive(Debug)]
pub struct InputFile {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub extension: String,
}

/// Resolves and reads `input_path`.
pub fn read_input(input_path: &Path) -> CliResult<InputFile> {
    let path = input_path.canonicalize().map_err(|e| {
        CoreError::PathError(format!(
            "Invalid input path '{}': {}",
            input_path.display(),
            e
        ))
    })?;

    if !path.is_file() {
        return Err(CoreError::PathError(format!(
            "Input path '{}' is not a file",
            path.display()
        )));
    }

    let bytes = fs::read(&path).cli_with_context(|| format!("Failed to read '{}'", path.display()))?;
    let extension = file_extension(&path);
    Ok(InputFile {
        path,
        bytes,
        extension,
    })
}

/// Environment-derived configuration with the CLI's overrides applied.
pub fn core_config(temp_dir: Option<PathBuf>) -> CliResult<CoreConfig> {
    let mut builder = CoreConfigBuilder::from_config(CoreConfig::from_env());
    if let Some(dir) = temp_dir {
        builder = builder.temp_dir(dir);
    }
    let config = builder.build();
    config.validate()?;
    Ok(config)
}
