//! FFmpeg command building for exports and cuts
//!
//! Builds the three invocations soundlab needs: a filtered re-encode for
//! exports, a single-range extraction to lossless WAV, and a stream-copy
//! join through the concat demuxer. Running them is left to
//! [`run_ffmpeg`](super::ffmpeg_executor::run_ffmpeg).

use crate::edit::{CutSegment, ExportPlan, SegmentPosition};
use crate::error::{CoreError, CoreResult};
use crate::external::FfmpegCommandBuilder;

use ffmpeg_sidecar::command::FfmpegCommand;
use log::debug;

use std::fs;
use std::path::{Path, PathBuf};

/// Codec used for cut intermediates and cut output.
pub const INTERMEDIATE_CODEC: &str = "pcm_s16le";

/// Builds the export re-encode:
/// `-i IN [-af CHAIN] -ar RATE -c:a CODEC [-b:a Nk] [-ac N] [-write_xing 0] OUT`.
pub fn build_export_command(plan: &ExportPlan, input: &Path, output: &Path) -> FfmpegCommand {
    let mut cmd = FfmpegCommandBuilder::new().build();
    cmd.input(input.to_string_lossy().as_ref());

    if let Some(chain) = plan.filter_chain() {
        cmd.args(["-af", chain.as_str()]);
    }

    let target = &plan.target;
    cmd.args(["-ar", &target.sample_rate_hz.to_string()]);
    cmd.args(["-c:a", target.codec.ffmpeg_name()]);

    if let Some(bitrate) = target.bitrate_kbps {
        cmd.args(["-b:a", &format!("{bitrate}k")]);
    }
    if let Some(channels) = target.channels {
        cmd.args(["-ac", &channels.to_string()]);
    }
    if !target.write_xing {
        cmd.args(["-write_xing", "0"]);
    }

    cmd.output(output.to_string_lossy().as_ref());
    cmd
}

/// Builds the extraction of one kept cut segment into a PCM WAV file.
///
/// The leading segment is bounded with `-t`; the trailing one seeks with
/// `-ss` placed after the input and runs to the end of the source.
pub fn build_extract_command(input: &Path, segment: &CutSegment, output: &Path) -> FfmpegCommand {
    let mut cmd = FfmpegCommandBuilder::new().build();
    cmd.input(input.to_string_lossy().as_ref());

    let range = segment.range;
    if range.start > 0.0 {
        cmd.args(["-ss", &range.start.to_string()]);
    }
    if segment.position == SegmentPosition::Before {
        cmd.args(["-t", &range.duration().to_string()]);
    }

    cmd.args(["-c:a", INTERMEDIATE_CODEC]);
    cmd.output(output.to_string_lossy().as_ref());
    cmd
}

/// Builds the concat-demuxer join: `-f concat -safe 0 -i LIST -c copy OUT`.
pub fn build_concat_command(list: &Path, output: &Path) -> FfmpegCommand {
    let mut cmd = FfmpegCommandBuilder::new().build();
    cmd.args(["-f", "concat", "-safe", "0"]);
    cmd.input(list.to_string_lossy().as_ref());
    cmd.args(["-c", "copy"]);
    cmd.output(output.to_string_lossy().as_ref());
    cmd
}

/// Renders a concat-demuxer list, one `file '...'` line per part.
///
/// Backslashes become forward slashes and single quotes are escaped as
/// `'\''`.
pub fn concat_list_contents(parts: &[PathBuf]) -> String {
    parts
        .iter()
        .map(|part| {
            let path = part.to_string_lossy().replace('\\', "/").replace('\'', r"'\''");
            format!("file '{path}'\n")
        })
        .collect()
}

/// Writes the concat list for `parts` to `list_path`.
pub fn write_concat_list(list_path: &Path, parts: &[PathBuf]) -> CoreResult<()> {
    let contents = concat_list_contents(parts);
    debug!("Writing concat list {}:\n{}", list_path.display(), contents);
    fs::write(list_path, contents)?;
    Ok(())
}

/// Fails with `MissingOutput` when `path` is absent or empty after a
/// successful engine run.
pub fn ensure_output(label: &str, path: &Path) -> CoreResult<u64> {
    match fs::metadata(path) {
        Ok(meta) if meta.len() > 0 => Ok(meta.len()),
        _ => Err(CoreError::MissingOutput(label.to_string(), path.to_path_buf())),
    }
}
