//! FFprobe integration for duration probing
//!
//! The whole-track guard and the cut planner both need the source duration.
//! `FfprobeExecutor` abstracts the probe so pipelines can be tested with a
//! fixed-duration stand-in; `CrateFfprobeExecutor` is the production
//! implementation backed by the `ffprobe` crate.
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use ffprobe::{FfProbeError, ffprobe};
use std::path::Path;

/// Trait for anything that can report the duration of an audio file.
pub trait FfprobeExecutor {
    /// Returns the container duration of `input_path` in seconds.
    fn get_duration(&self, input_path: &Path) -> CoreResult<f64>;
}

/// Default executor using the `ffprobe` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrateFfprobeExecutor;

impl CrateFfprobeExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl FfprobeExecutor for CrateFfprobeExecutor {
    fn get_duration(&self, input_path: &Path) -> CoreResult<f64> {
        log::debug!(
            "Running ffprobe (via crate) for duration on: {}",
            input_path.display()
        );
        match ffprobe(input_path) {
            Ok(metadata) => {
                let duration = parse_duration(metadata.format.duration.as_deref()).ok_or_else(|| {
                    CoreError::FfprobeParse(format!(
                        "Failed to parse duration from format for {}",
                        input_path.display()
                    ))
                })?;
                log::debug!("Probed duration {:.3}s for {}", duration, input_path.display());
                Ok(duration)
            }
            Err(err) => {
                log::error!(
                    "ffprobe failed for duration on {}: {:?}",
                    input_path.display(),
                    err
                );
                Err(map_ffprobe_error(err, "duration"))
            }
        }
    }
}

/// Parses ffprobe's textual duration. Rejects missing, negative and
/// non-finite values.
pub fn parse_duration(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .and_then(|d| d.parse::<f64>().ok())
        .filter(|d| d.is_finite() && *d >= 0.0)
}

fn map_ffprobe_error(err: FfProbeError, context: &str) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => command_start_error(format!("ffprobe ({context})"), io_err),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            command_failed_error(format!("ffprobe ({context})"), output.status, stderr)
        }
        FfProbeError::Deserialize(err) => CoreError::JsonParseError(format!(
            "ffprobe {context} output deserialization: {err}"
        )),
        _ => CoreError::FfprobeParse(format!("Unknown ffprobe error during {context}: {err:?}")),
    }
}
