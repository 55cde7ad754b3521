//! Capturing the caller's audio into a request's working directory.

use crate::edit::guards::check_source;
use crate::error::CoreResult;
use crate::external::FfprobeExecutor;
use crate::temp_files::create_temp_file_path;

use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// The source audio of one request, written to disk so the engine can read
/// it. Immutable once captured.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSource {
    /// Working copy inside the request's temp directory.
    pub path: PathBuf,
    /// Container duration in seconds, as probed.
    pub duration: f64,
    /// Original file extension, without the dot. May be empty.
    pub extension: String,
    /// Size of the source in bytes.
    pub size: u64,
}

impl AudioSource {
    /// Validates that `bytes` is non-empty, writes the working copy into
    /// `workspace` and probes its duration.
    pub fn capture<P: FfprobeExecutor>(
        bytes: &[u8],
        extension: &str,
        workspace: &Path,
        prober: &P,
    ) -> CoreResult<Self> {
        check_source(bytes)?;

        let extension = normalize_extension(extension);
        let path = create_temp_file_path(workspace, "source", &extension);
        fs::write(&path, bytes)?;

        let duration = prober.get_duration(&path)?;
        let source = Self {
            path,
            duration,
            extension,
            size: bytes.len() as u64,
        };
        info!("Captured source: {}", source.summary());
        Ok(source)
    }

    /// One-line description for logs, e.g. `1024 bytes, 12.500s (.wav)`.
    pub fn summary(&self) -> String {
        let mut line = format!("{} bytes, {:.3}s", self.size, self.duration);
        if !self.extension.is_empty() {
            line.push_str(&format!(" (.{})", self.extension));
        }
        line
    }
}

/// Strips a leading dot and anything that is not ASCII alphanumeric, so the
/// extension is safe to splice into a file name.
fn normalize_extension(extension: &str) -> String {
    extension
        .trim()
        .trim_start_matches('.')
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::ValidationError;
    use crate::error::CoreError;

    struct FixedProber(f64);

    impl FfprobeExecutor for FixedProber {
        fn get_duration(&self, _input_path: &Path) -> CoreResult<f64> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_capture_writes_working_copy() {
        let workspace = tempfile::tempdir().unwrap();
        let source =
            AudioSource::capture(b"RIFFdata", ".WAV", workspace.path(), &FixedProber(12.5)).unwrap();

        assert_eq!(source.duration, 12.5);
        assert_eq!(source.extension, "wav");
        assert_eq!(source.size, 8);
        assert!(source.path.starts_with(workspace.path()));
        assert_eq!(fs::read(&source.path).unwrap(), b"RIFFdata");
    }

    #[test]
    fn test_empty_source_rejected_before_probe() {
        struct PanickingProber;
        impl FfprobeExecutor for PanickingProber {
            fn get_duration(&self, _input_path: &Path) -> CoreResult<f64> {
                panic!("probe must not run for an empty source");
            }
        }

        let workspace = tempfile::tempdir().unwrap();
        let err = AudioSource::capture(&[], "wav", workspace.path(), &PanickingProber).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::EmptySource)
        ));
    }

    #[test]
    fn test_summary_reports_size_duration_and_extension() {
        let workspace = tempfile::tempdir().unwrap();
        let source =
            AudioSource::capture(b"RIFFdata", "wav", workspace.path(), &FixedProber(12.5)).unwrap();
        assert_eq!(source.summary(), "8 bytes, 12.500s (.wav)");

        let bare = AudioSource::capture(b"ID3", "", workspace.path(), &FixedProber(3.0)).unwrap();
        assert_eq!(bare.summary(), "3 bytes, 3.000s");
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension(".Mp3"), "mp3");
        assert_eq!(normalize_extension("../x"), "x");
        assert_eq!(normalize_extension(""), "");
    }
}
