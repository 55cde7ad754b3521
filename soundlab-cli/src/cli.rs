// soundlab-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use soundlab_core::ExportRequest;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "SoundLab: cut regions out of audio and export them",
    long_about = "Cuts regions out of audio files and exports them as WAV or MP3 with volume, fade and speed changes, using ffmpeg via the soundlab-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write a log file into this directory
    #[arg(long, global = true, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Base directory for per-request working files
    #[arg(long, global = true, value_name = "DIR", env = "SOUNDLAB_TEMP_DIR")]
    pub temp_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Removes a region from an audio file and joins the remainder
    Cut(CutArgs),
    /// Re-encodes an audio file with optional trim, volume, fades and speed
    Export(ExportArgs),
    /// Prints the duration and size of an audio file
    Probe(ProbeArgs),
}

#[derive(Args, Debug)]
pub struct CutArgs {
    /// Source audio file
    #[arg(short = 'i', long = "input", value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    /// Directory where cut.wav is written
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Start of the region to remove, in seconds
    #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub start: f64,

    /// End of the region to remove, in seconds
    #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub end: f64,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Source audio file
    #[arg(short = 'i', long = "input", value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    /// Directory where the export is written
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// JSON file with export settings; flags below override its fields
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    // --- Scope ---
    /// "all" (default) or "region"
    #[arg(long, value_name = "SCOPE")]
    pub scope: Option<String>,

    #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub region_start: Option<f64>,

    #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub region_end: Option<f64>,

    // --- Transforms ---
    /// Playback speed factor, clamped to 0.25..=4
    #[arg(long, value_name = "FACTOR", allow_negative_numbers = true)]
    pub speed: Option<String>,

    /// Gain factor, clamped to 0..=2
    #[arg(long, value_name = "GAIN", allow_negative_numbers = true)]
    pub volume: Option<f64>,

    #[arg(long, value_name = "SECONDS")]
    pub fade_in_start: Option<f64>,

    #[arg(long, value_name = "SECONDS")]
    pub fade_in_end: Option<f64>,

    #[arg(long, value_name = "SECONDS")]
    pub fade_out_start: Option<f64>,

    #[arg(long, value_name = "SECONDS")]
    pub fade_out_end: Option<f64>,

    // --- Quality ---
    #[arg(long, value_name = "HZ")]
    pub sample_rate: Option<u32>,

    /// WAV bit depth: 16, 24 or 32
    #[arg(long, value_name = "BITS")]
    pub bit_depth: Option<u32>,

    #[arg(long, value_name = "KBPS")]
    pub mp3_bitrate: Option<u32>,

    /// "wav" (default) or "mp3"
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Name of the exported file; the extension is corrected to match the format
    #[arg(long, value_name = "NAME")]
    pub file_name: Option<String>,
}

impl ExportArgs {
    /// Applies the flags that were given on top of `base`.
    pub fn merge_into(&self, base: ExportRequest) -> ExportRequest {
        ExportRequest {
            export_scope: self.scope.clone().or(base.export_scope),
            region_start: self.region_start.or(base.region_start),
            region_end: self.region_end.or(base.region_end),
            speed: self.speed.clone().or(base.speed),
            fade_in_start: self.fade_in_start.or(base.fade_in_start),
            fade_in_end: self.fade_in_end.or(base.fade_in_end),
            fade_out_start: self.fade_out_start.or(base.fade_out_start),
            fade_out_end: self.fade_out_end.or(base.fade_out_end),
            volume: self.volume.or(base.volume),
            sample_rate: self.sample_rate.or(base.sample_rate),
            bit_depth: self.bit_depth.or(base.bit_depth),
            mp3_bitrate: self.mp3_bitrate.or(base.mp3_bitrate),
            format: self.format.clone().or(base.format),
            file_name: self.file_name.clone().or(base.file_name),
        }
    }
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Audio file to inspect
    #[arg(short = 'i', long = "input", value_name = "INPUT_PATH")]
    pub input_path: PathBuf,
}
