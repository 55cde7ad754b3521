//! Core library for cutting and exporting audio with ffmpeg and ffprobe.
//!
//! The [`edit`] module compiles raw cut and export requests into validated
//! settings, ordered ffmpeg filter stages, legal encoding targets and cut
//! plans. The [`processing`] module runs those plans through the external
//! engine, one private working directory per request.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use soundlab_core::{CoreConfig, ExportRequest, cut_audio, export_audio};
//! use soundlab_core::edit::Region;
//! use soundlab_core::external::{CrateFfprobeExecutor, SidecarSpawner};
//!
//! let config = CoreConfig::from_env();
//! config.validate().unwrap();
//!
//! let bytes = std::fs::read("take1.wav").unwrap();
//! let spawner = SidecarSpawner;
//! let prober = CrateFfprobeExecutor::new();
//!
//! let cut = cut_audio(&spawner, &prober, &config, &bytes, "wav", Region::new(3.0, 7.0)).unwrap();
//! assert_eq!(cut.file_name, "cut.wav");
//!
//! let request = ExportRequest {
//!     format: Some("mp3".to_string()),
//!     speed: Some("1.25".to_string()),
//!     ..ExportRequest::default()
//! };
//! let export = export_audio(&spawner, &prober, &config, &bytes, "wav", &request).unwrap();
//! assert_eq!(export.mime_type, "audio/mpeg");
//! ```

pub mod config;
pub mod edit;
pub mod error;
pub mod external;
pub mod file_logging;
pub mod media;
pub mod processing;
pub mod temp_files;
pub mod utils;

// Re-exports for public API
pub use config::{CoreConfig, CoreConfigBuilder};
pub use edit::{ExportRequest, ExportSettings, Region, ValidationError};
pub use error::{CoreError, CoreResult};
pub use external::check_engine;
pub use media::AudioSource;
pub use processing::{
    EditCommand, EditOutput, EditSession, cut_audio, export_audio, export_with_settings,
    load_export_request, sanitize_file_name,
};
pub use temp_files::{cleanup_temp_dir, create_temp_dir, create_temp_file_path};
pub use utils::{format_bytes, format_duration};
