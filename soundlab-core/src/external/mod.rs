// ============================================================================
// soundlab-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffmpeg and ffprobe
//
// This module wraps the external audio engine. The pure `edit` module decides
// what to do; this module turns those decisions into ffmpeg invocations,
// runs them, and probes source durations.
//
// KEY COMPONENTS:
// - Traits for external tool interactions (FfmpegSpawner, FfprobeExecutor)
// - Concrete implementations using ffmpeg-sidecar and ffprobe crates
// - Command builders for export, extraction and concatenation
// - Dependency checking
//
// Consumers can supply their own trait implementations; the pipeline tests
// use a recording spawner and a fixed-duration prober.

use crate::error::{CoreError, CoreResult};

use std::io;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Argument building for export, extraction and concat invocations
pub mod ffmpeg;

/// Shared flags for every ffmpeg invocation
pub mod ffmpeg_builder;

/// Traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

/// Traits and implementations for probing durations with ffprobe
pub mod ffprobe_executor;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffmpeg::{
    build_concat_command, build_export_command, build_extract_command, ensure_output,
    write_concat_list,
};
pub use ffmpeg_builder::FfmpegCommandBuilder;
pub use ffmpeg_executor::{
    Diagnostics, FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner, run_ffmpeg,
};
pub use ffprobe_executor::{CrateFfprobeExecutor, FfprobeExecutor};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks if a required external command is available and executable.
///
/// Runs `cmd_name -version` with output discarded.
///
/// # Returns
///
/// * `Ok(())` - The command could be started
/// * `Err(CoreError::DependencyNotFound)` - The command is not on `PATH`
/// * `Err(CoreError::CommandStart)` - The command exists but failed to start
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", cmd_name);
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{}': {}", cmd_name, e);
            Err(CoreError::CommandStart(cmd_name.to_string(), e))
        }
    }
}

/// Checks for both ffmpeg and ffprobe.
pub fn check_engine() -> CoreResult<()> {
    check_dependency("ffmpeg")?;
    check_dependency("ffprobe")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dependency_is_reported() {
        let result = check_dependency("soundlab-no-such-binary-xyz");
        assert!(matches!(result, Err(CoreError::DependencyNotFound(name)) if name == "soundlab-no-such-binary-xyz"));
    }
}
