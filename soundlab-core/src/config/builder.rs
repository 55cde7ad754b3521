// ============================================================================
// soundlab-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent construction of `CoreConfig`. Every field has a default, so
// `CoreConfigBuilder::new().build()` equals `CoreConfig::default()`.

use std::path::PathBuf;

use super::CoreConfig;
use crate::edit::{AudioFormat, ExportDefaults};

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use soundlab_core::config::CoreConfigBuilder;
/// use soundlab_core::edit::AudioFormat;
///
/// let config = CoreConfigBuilder::new()
///     .default_format(AudioFormat::Mp3)
///     .default_mp3_bitrate(256)
///     .build();
/// assert_eq!(config.export_defaults.file_name, "export.mp3");
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfigBuilder {
    temp_dir: Option<PathBuf>,
    export_defaults: ExportDefaults,
}

impl Default for CoreConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreConfigBuilder {
    pub fn new() -> Self {
        Self {
            temp_dir: None,
            export_defaults: ExportDefaults::default(),
        }
    }

    /// Starts from an existing configuration, e.g. one read from the environment.
    pub fn from_config(config: CoreConfig) -> Self {
        Self {
            temp_dir: config.temp_dir,
            export_defaults: config.export_defaults,
        }
    }

    /// Sets the base directory for per-request working directories.
    pub fn temp_dir(mut self, path: PathBuf) -> Self {
        self.temp_dir = Some(path);
        self
    }

    pub fn default_sample_rate(mut self, sample_rate_hz: u32) -> Self {
        self.export_defaults.sample_rate_hz = sample_rate_hz;
        self
    }

    pub fn default_bit_depth(mut self, bit_depth: u32) -> Self {
        self.export_defaults.bit_depth = bit_depth;
        self
    }

    pub fn default_mp3_bitrate(mut self, kbps: u32) -> Self {
        self.export_defaults.mp3_bitrate_kbps = kbps;
        self
    }

    /// Sets the default container. The default file name follows the
    /// container's extension.
    pub fn default_format(mut self, format: AudioFormat) -> Self {
        self.export_defaults.format = format;
        self.export_defaults.file_name = format!("export.{}", format.extension());
        self
    }

    pub fn build(self) -> CoreConfig {
        CoreConfig {
            temp_dir: self.temp_dir,
            export_defaults: self.export_defaults,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_match_config_defaults() {
        let built = CoreConfigBuilder::new().build();
        let default = CoreConfig::default();
        assert_eq!(built.temp_dir, default.temp_dir);
        assert_eq!(built.export_defaults, default.export_defaults);
    }

    #[test]
    fn test_builder_overrides() {
        let config = CoreConfigBuilder::new()
            .temp_dir(PathBuf::from("/var/tmp/soundlab"))
            .default_sample_rate(48_000)
            .default_bit_depth(24)
            .default_mp3_bitrate(320)
            .build();

        assert_eq!(config.temp_dir, Some(PathBuf::from("/var/tmp/soundlab")));
        assert_eq!(config.export_defaults.sample_rate_hz, 48_000);
        assert_eq!(config.export_defaults.bit_depth, 24);
        assert_eq!(config.export_defaults.mp3_bitrate_kbps, 320);
        assert_eq!(config.export_defaults.format, AudioFormat::Wav);
    }
}
