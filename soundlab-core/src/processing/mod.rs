//! Request pipelines: cut and export, end to end.
//!
//! Each entry point owns one request. It validates the raw input, creates a
//! private working directory, captures the source, compiles the edit through
//! [`crate::edit`], runs ffmpeg and reads the result back before the working
//! directory is removed.

/// Region removal: extract the kept segments and join them
pub mod cut;

/// Filtered re-encode to WAV or MP3
pub mod export;

/// Output artifacts and their file names
pub mod output;

/// Request-scoped session and commands
pub mod session;

pub use cut::cut_audio;
pub use export::{export_audio, export_with_settings, load_export_request};
pub use output::{CUT_FILE_NAME, EditOutput, sanitize_file_name};
pub use session::{EditCommand, EditSession};
