// ============================================================================
// soundlab-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: FFmpeg Process Management and Abstraction
//
// Traits for spawning ffmpeg and consuming its events, plus the default
// implementation backed by ffmpeg-sidecar.
//
// KEY COMPONENTS:
// - FfmpegProcess: an active ffmpeg process
// - FfmpegSpawner: creates processes from a prepared command
// - SidecarSpawner / SidecarProcess: ffmpeg-sidecar implementation
// - run_ffmpeg: spawn, drain events, wait, and turn a bad exit into an error
//   carrying the engine's own error lines
//
// Pipelines that run cut extractions in parallel require `FfmpegSpawner +
// Sync`; `SidecarSpawner` is a unit struct and satisfies that trivially.

use crate::error::{CoreResult, command_failed_error, command_start_error, command_wait_error};
use ffmpeg_sidecar::child::FfmpegChild as SidecarChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use std::process::ExitStatus;

// --- FFmpeg Execution Abstraction ---

/// Trait representing an active ffmpeg process instance.
pub trait FfmpegProcess {
    /// Processes events from the running command using a provided handler closure.
    fn handle_events<F>(&mut self, handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>;

    /// Waits for the command to complete and returns its exit status.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Trait representing something that can spawn an FfmpegProcess.
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;
    /// Spawns the ffmpeg command, consuming the command object.
    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process>;
}

// --- Concrete Implementation using ffmpeg-sidecar ---

/// Wrapper around `ffmpeg_sidecar::child::FfmpegChild` implementing `FfmpegProcess`.
pub struct SidecarProcess(SidecarChild);

impl FfmpegProcess for SidecarProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        let iterator = self.0.iter().map_err(|e| {
            log::error!("Failed to get ffmpeg event iterator: {}", e);
            command_failed_error(
                "ffmpeg (sidecar - get iter)",
                ExitStatus::default(),
                e.to_string(),
            )
        })?;
        for event in iterator {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.0
            .wait()
            .map_err(|e| command_wait_error("ffmpeg (sidecar)", e))
    }
}

/// Concrete implementation of `FfmpegSpawner` using `ffmpeg-sidecar`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        cmd.spawn()
            .map(SidecarProcess)
            .map_err(|e| command_start_error("ffmpeg (sidecar)", e))
    }
}

// --- Running a Command to Completion ---

/// Error lines ffmpeg emitted while running.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    lines: Vec<String>,
}

impl Diagnostics {
    fn record(&mut self, event: &FfmpegEvent) {
        match event {
            FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, line) => {
                self.lines.push(line.trim().to_string());
            }
            FfmpegEvent::Error(message) => {
                self.lines.push(message.trim().to_string());
            }
            _ => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Diagnostics joined for an error message.
    pub fn summary(&self) -> String {
        if self.lines.is_empty() {
            "no diagnostics reported".to_string()
        } else {
            self.lines.join("\n")
        }
    }
}

/// Spawns `cmd`, drains its events and waits for it to exit.
///
/// `label` names the step in logs and errors (for example `"ffmpeg (export)"`).
/// A non-zero exit becomes `CoreError::CommandFailed` with the collected
/// diagnostics.
pub fn run_ffmpeg<S: FfmpegSpawner>(
    spawner: &S,
    cmd: FfmpegCommand,
    label: &str,
) -> CoreResult<Diagnostics> {
    let args: Vec<String> = cmd
        .get_args()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    log::debug!("Running {}: ffmpeg {}", label, args.join(" "));

    let mut process = spawner.spawn(cmd).map_err(|e| {
        log::error!("Failed to spawn {}: {}", label, e);
        e
    })?;

    let mut diagnostics = Diagnostics::default();
    process.handle_events(|event| {
        if let FfmpegEvent::Log(LogLevel::Warning, line) = &event {
            log::debug!("{}: {}", label, line.trim());
        }
        diagnostics.record(&event);
        Ok(())
    })?;

    let status = process.wait()?;
    if !status.success() {
        log::error!("{} exited with {}", label, status);
        return Err(command_failed_error(label, status, diagnostics.summary()));
    }

    if !diagnostics.is_empty() {
        log::warn!(
            "{} succeeded but reported {} error line(s)",
            label,
            diagnostics.lines().len()
        );
    }

    Ok(diagnostics)
}
