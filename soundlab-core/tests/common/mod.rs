// soundlab-core/tests/common/mod.rs
//
// Test doubles for the external engine: a recording ffmpeg spawner that
// writes placeholder output files, and a prober with a fixed duration.

#![allow(dead_code)]

use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use soundlab_core::error::{CoreError, CoreResult};
use soundlab_core::external::{FfmpegProcess, FfmpegSpawner, FfprobeExecutor};
use soundlab_core::CoreConfig;
use soundlab_core::config::CoreConfigBuilder;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::sync::{Arc, Mutex};

/// Bytes the mock writes to every output path.
pub const DUMMY_OUTPUT: &[u8] = b"RIFF\x24\x00\x00\x00WAVEfmt ";

/// Bytes used as the source in pipeline tests.
pub const SOURCE_BYTES: &[u8] = b"RIFF\x24\x00\x00\x00WAVEsource";

/// Mock implementation of FfmpegProcess.
pub struct MockFfmpegProcess {
    events: Vec<FfmpegEvent>,
    exit_status: ExitStatus,
}

impl FfmpegProcess for MockFfmpegProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        for event in self.events.drain(..) {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        Ok(self.exit_status)
    }
}

#[derive(Clone)]
struct Failure {
    arg_pattern: String,
    exit_code: i32,
    diagnostics: Vec<String>,
}

/// Recording spawner. Every call succeeds and writes `DUMMY_OUTPUT` to the
/// command's last argument unless a failure or skipped output was registered
/// for an argument containing the pattern.
#[derive(Clone, Default)]
pub struct MockFfmpegSpawner {
    received_calls: Arc<Mutex<Vec<Vec<String>>>>,
    failures: Arc<Mutex<Vec<Failure>>>,
    skip_output: Arc<Mutex<Vec<String>>>,
}

impl MockFfmpegSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls with an argument containing `arg_pattern` exit with `exit_code`
    /// after logging `diagnostics` at error level.
    pub fn fail_when(&self, arg_pattern: &str, exit_code: i32, diagnostics: &[&str]) {
        self.failures.lock().unwrap().push(Failure {
            arg_pattern: arg_pattern.to_string(),
            exit_code,
            diagnostics: diagnostics.iter().map(|d| d.to_string()).collect(),
        });
    }

    /// Calls with an argument containing `arg_pattern` succeed but write nothing.
    pub fn skip_output_when(&self, arg_pattern: &str) {
        self.skip_output
            .lock()
            .unwrap()
            .push(arg_pattern.to_string());
    }

    pub fn get_received_calls(&self) -> Vec<Vec<String>> {
        self.received_calls.lock().unwrap().clone()
    }
}

fn matches_pattern(args: &[String], pattern: &str) -> bool {
    args.iter().any(|a| a.contains(pattern))
}

impl FfmpegSpawner for MockFfmpegSpawner {
    type Process = MockFfmpegProcess;

    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        let args: Vec<String> = cmd
            .get_args()
            .map(|s| s.to_string_lossy().into_owned())
            .collect();
        self.received_calls.lock().unwrap().push(args.clone());

        let failure = self
            .failures
            .lock()
            .unwrap()
            .iter()
            .find(|f| matches_pattern(&args, &f.arg_pattern))
            .cloned();

        if let Some(failure) = failure {
            let events = failure
                .diagnostics
                .into_iter()
                .map(|line| FfmpegEvent::Log(LogLevel::Error, line))
                .collect();
            return Ok(MockFfmpegProcess {
                events,
                exit_status: ExitStatus::from_raw(failure.exit_code << 8),
            });
        }

        let skip = self
            .skip_output
            .lock()
            .unwrap()
            .iter()
            .any(|p| matches_pattern(&args, p));
        if !skip {
            if let Some(output) = args.last() {
                std::fs::write(output, DUMMY_OUTPUT)?;
            }
        }

        Ok(MockFfmpegProcess {
            events: vec![FfmpegEvent::Log(
                LogLevel::Info,
                "mock ffmpeg run".to_string(),
            )],
            exit_status: ExitStatus::from_raw(0),
        })
    }
}

/// Prober reporting a fixed duration and recording probed paths.
#[derive(Clone, Default)]
pub struct MockProber {
    duration: f64,
    probed: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockProber {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration,
            probed: Arc::default(),
        }
    }

    pub fn probed_paths(&self) -> Vec<PathBuf> {
        self.probed.lock().unwrap().clone()
    }
}

impl FfprobeExecutor for MockProber {
    fn get_duration(&self, input_path: &Path) -> CoreResult<f64> {
        self.probed.lock().unwrap().push(input_path.to_path_buf());
        Ok(self.duration)
    }
}

/// Prober that always fails like a corrupt input would.
pub struct FailingProber;

impl FfprobeExecutor for FailingProber {
    fn get_duration(&self, input_path: &Path) -> CoreResult<f64> {
        Err(CoreError::FfprobeParse(format!(
            "Failed to parse duration from format for {}",
            input_path.display()
        )))
    }
}

/// Config whose working directories go under `base`.
pub fn config_in(base: &Path) -> CoreConfig {
    CoreConfigBuilder::new()
        .temp_dir(base.to_path_buf())
        .build()
}

/// Number of entries left in `dir`.
pub fn entries_in(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|r| r.count()).unwrap_or(0)
}

/// The value following `flag` in `args`.
pub fn value_after<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}
