//! Configuration structures and constants for the soundlab-core library.
//!
//! `CoreConfig` carries the settings that are not part of an individual edit
//! request: where temporary working files go and which values fill in
//! export fields a request leaves out.

mod builder;
pub mod utils;

use crate::edit::format::{DEFAULT_BIT_DEPTH, DEFAULT_MP3_BITRATE, DEFAULT_SAMPLE_RATE};
use crate::edit::{AudioFormat, ExportDefaults};
use crate::error::{CoreError, CoreResult};

use std::path::PathBuf;

pub use builder::CoreConfigBuilder;

/// Environment variable overriding the temporary directory.
pub const ENV_TEMP_DIR: &str = "SOUNDLAB_TEMP_DIR";

/// Environment variable overriding the default export sample rate.
pub const ENV_DEFAULT_SAMPLE_RATE: &str = "SOUNDLAB_DEFAULT_SAMPLE_RATE";

/// Environment variable overriding the default MP3 bitrate.
pub const ENV_DEFAULT_MP3_BITRATE: &str = "SOUNDLAB_DEFAULT_MP3_BITRATE";

/// Prefix for per-request working directories.
pub const TEMP_DIR_PREFIX: &str = "soundlab_";

/// Main configuration structure for the soundlab-core library.
///
/// Created by the consumer (for example soundlab-cli) and passed to the
/// pipeline functions.
///
/// # Examples
///
/// ```rust
/// use soundlab_core::config::CoreConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .temp_dir(PathBuf::from("/tmp/soundlab"))
///     .default_sample_rate(48_000)
///     .build();
/// assert_eq!(config.export_defaults.sample_rate_hz, 48_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoreConfig {
    /// Base directory for per-request working directories
    /// (defaults to the system temp directory)
    pub temp_dir: Option<PathBuf>,

    /// Values used for export fields a request does not set
    pub export_defaults: ExportDefaults,
}

impl CoreConfig {
    /// Defaults overridden by `SOUNDLAB_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            temp_dir: utils::get_env_opt_path(ENV_TEMP_DIR),
            export_defaults: ExportDefaults {
                sample_rate_hz: utils::get_env_u32(ENV_DEFAULT_SAMPLE_RATE, DEFAULT_SAMPLE_RATE),
                bit_depth: DEFAULT_BIT_DEPTH,
                mp3_bitrate_kbps: utils::get_env_u32(ENV_DEFAULT_MP3_BITRATE, DEFAULT_MP3_BITRATE),
                format: AudioFormat::Wav,
                file_name: "export.wav".to_string(),
            },
        }
    }

    /// Rejects settings no request could work with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.export_defaults.sample_rate_hz == 0 {
            return Err(CoreError::Config(
                "default sample rate must be greater than zero".to_string(),
            ));
        }
        if self.export_defaults.mp3_bitrate_kbps == 0 {
            return Err(CoreError::Config(
                "default MP3 bitrate must be greater than zero".to_string(),
            ));
        }
        if let Some(dir) = &self.temp_dir {
            if dir.exists() && !dir.is_dir() {
                return Err(CoreError::Config(format!(
                    "temp directory {} is not a directory",
                    dir.display()
                )));
            }
        }
        Ok(())
    }
}
