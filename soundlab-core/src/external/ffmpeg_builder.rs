//! FFmpeg command builder utilities
//!
//! Starts every soundlab invocation with the flags they all share: banner
//! suppression and unconditional overwrite of the output. The log level is
//! left as ffmpeg-sidecar sets it, since event parsing depends on it.

use ffmpeg_sidecar::command::FfmpegCommand;

/// Builder for creating `FFmpeg` commands with common configurations
pub struct FfmpegCommandBuilder {
    cmd: FfmpegCommand,
}

impl Default for FfmpegCommandBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FfmpegCommandBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cmd: FfmpegCommand::new(),
        }
    }

    /// Builds the command with `-hide_banner -y` applied.
    #[must_use]
    pub fn build(mut self) -> FfmpegCommand {
        self.cmd.arg("-hide_banner");
        self.cmd.arg("-y");
        self.cmd
    }
}
