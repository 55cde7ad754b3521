// ============================================================================
// soundlab-core/src/processing/cut.rs
// ============================================================================
//
// CUT PIPELINE: Removing a Region from the Source
//
// WORKFLOW:
// 1. Validate source presence and region shape (no engine work yet)
// 2. Create the request's working directory
// 3. Capture the source and probe its duration
// 4. Whole-track guard
// 5. Plan the kept segments
// 6. Extract the segments (in parallel when there are two)
// 7. Join them with the concat demuxer, or use the single segment as-is
// 8. Read the result and remove the working directory

use crate::config::{CoreConfig, TEMP_DIR_PREFIX};
use crate::edit::guards::{check_not_whole_track, validate_cut_request};
use crate::edit::{AudioFormat, CutSegment, Region, ValidationError, plan_cut};
use crate::error::CoreResult;
use crate::external::{
    FfmpegSpawner, FfprobeExecutor, build_concat_command, build_extract_command, ensure_output,
    run_ffmpeg, write_concat_list,
};
use crate::media::AudioSource;
use crate::processing::output::{CUT_FILE_NAME, EditOutput};
use crate::temp_files::{cleanup_temp_dir, create_temp_dir, create_temp_file_path};

use log::info;
use std::fs;
use std::path::Path;

/// Removes `region` from the audio in `bytes` and returns the joined
/// remainder as WAV.
///
/// `extension` is the source's original file extension and only names the
/// working copy. The working directory is removed on every exit path.
pub fn cut_audio<S, P>(
    spawner: &S,
    prober: &P,
    config: &CoreConfig,
    bytes: &[u8],
    extension: &str,
    region: Region,
) -> CoreResult<EditOutput>
where
    S: FfmpegSpawner + Sync,
    P: FfprobeExecutor,
{
    validate_cut_request(bytes, &region)?;
    info!("Cutting region {}", region);

    let workspace = create_temp_dir(config, TEMP_DIR_PREFIX)?;
    let result = run_cut(spawner, prober, workspace.path(), bytes, extension, &region);
    cleanup_temp_dir(workspace);

    if let Ok(output) = &result {
        info!("Cut complete: {} bytes", output.bytes.len());
    }
    result
}

fn run_cut<S, P>(
    spawner: &S,
    prober: &P,
    workspace: &Path,
    bytes: &[u8],
    extension: &str,
    region: &Region,
) -> CoreResult<EditOutput>
where
    S: FfmpegSpawner + Sync,
    P: FfprobeExecutor,
{
    let source = AudioSource::capture(bytes, extension, workspace, prober)?;
    check_not_whole_track(region, source.duration)?;

    let plan = plan_cut(region, source.duration);
    let output_path = workspace.join(CUT_FILE_NAME);

    match plan.segments().as_slice() {
        [] => {
            return Err(ValidationError::WholeTrackCut {
                start: region.start,
                end: region.end,
                duration: source.duration,
            }
            .into());
        }
        [only] => {
            info!("Single segment remains, skipping join");
            extract_segment(spawner, &source.path, only, &output_path)?;
        }
        [before, after, ..] => {
            let before_path = create_temp_file_path(workspace, "part_a", "wav");
            let after_path = create_temp_file_path(workspace, "part_b", "wav");

            let (before_result, after_result) = rayon::join(
                || extract_segment(spawner, &source.path, before, &before_path),
                || extract_segment(spawner, &source.path, after, &after_path),
            );
            before_result?;
            after_result?;

            let list_path = create_temp_file_path(workspace, "concat", "txt");
            write_concat_list(&list_path, &[before_path, after_path])?;
            run_ffmpeg(
                spawner,
                build_concat_command(&list_path, &output_path),
                "ffmpeg (concat)",
            )?;
            ensure_output("ffmpeg (concat)", &output_path)?;
        }
    }

    Ok(EditOutput {
        bytes: fs::read(&output_path)?,
        file_name: CUT_FILE_NAME.to_string(),
        mime_type: AudioFormat::Wav.mime_type(),
    })
}

fn extract_segment<S: FfmpegSpawner>(
    spawner: &S,
    input: &Path,
    segment: &CutSegment,
    output: &Path,
) -> CoreResult<u64> {
    let label = "ffmpeg (extract)";
    log::debug!(
        "Extracting {:?} segment {} to {}",
        segment.position,
        segment.range,
        output.display()
    );
    run_ffmpeg(spawner, build_extract_command(input, segment, output), label)?;
    ensure_output(label, output)
}
