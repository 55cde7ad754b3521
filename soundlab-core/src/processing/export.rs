// ============================================================================
// soundlab-core/src/processing/export.rs
// ============================================================================
//
// EXPORT PIPELINE: Filtered Re-encode to WAV or MP3
//
// WORKFLOW:
// 1. Validate source presence and compile the request (parse, clamp, scope)
// 2. Create the request's working directory
// 3. Capture the source and probe its duration
// 4. Resolve the encoding target and build the filter plan
// 5. Run ffmpeg once
// 6. Read the result, name it, and remove the working directory

use crate::config::{CoreConfig, TEMP_DIR_PREFIX};
use crate::edit::guards::check_source;
use crate::edit::{ExportRequest, ExportSettings, build_export_plan, resolve_quality};
use crate::error::{CoreError, CoreResult};
use crate::external::{
    FfmpegSpawner, FfprobeExecutor, build_export_command, ensure_output, run_ffmpeg,
};
use crate::media::AudioSource;
use crate::processing::output::{EditOutput, sanitize_file_name};
use crate::temp_files::{cleanup_temp_dir, create_temp_dir};

use log::info;
use std::fs;
use std::path::Path;

/// Compiles `request` against the configured defaults and exports `bytes`.
pub fn export_audio<S, P>(
    spawner: &S,
    prober: &P,
    config: &CoreConfig,
    bytes: &[u8],
    extension: &str,
    request: &ExportRequest,
) -> CoreResult<EditOutput>
where
    S: FfmpegSpawner,
    P: FfprobeExecutor,
{
    check_source(bytes)?;
    let settings = request.compile(&config.export_defaults)?;
    export_with_settings(spawner, prober, config, bytes, extension, &settings)
}

/// Exports `bytes` with already compiled settings.
pub fn export_with_settings<S, P>(
    spawner: &S,
    prober: &P,
    config: &CoreConfig,
    bytes: &[u8],
    extension: &str,
    settings: &ExportSettings,
) -> CoreResult<EditOutput>
where
    S: FfmpegSpawner,
    P: FfprobeExecutor,
{
    check_source(bytes)?;
    info!(
        "Exporting {} ({} transform(s))",
        settings.format(),
        settings.transforms.len()
    );

    let workspace = create_temp_dir(config, TEMP_DIR_PREFIX)?;
    let result = run_export(spawner, prober, workspace.path(), bytes, extension, settings);
    cleanup_temp_dir(workspace);

    if let Ok(output) = &result {
        info!(
            "Export complete: {} ({} bytes)",
            output.file_name,
            output.bytes.len()
        );
    }
    result
}

fn run_export<S, P>(
    spawner: &S,
    prober: &P,
    workspace: &Path,
    bytes: &[u8],
    extension: &str,
    settings: &ExportSettings,
) -> CoreResult<EditOutput>
where
    S: FfmpegSpawner,
    P: FfprobeExecutor,
{
    let source = AudioSource::capture(bytes, extension, workspace, prober)?;

    let target = resolve_quality(&settings.quality);
    let plan = build_export_plan(settings, target, source.duration);

    let format = settings.format();
    let output_path = workspace.join(format!("export.{}", format.extension()));
    let label = "ffmpeg (export)";

    run_ffmpeg(
        spawner,
        build_export_command(&plan, &source.path, &output_path),
        label,
    )?;
    ensure_output(label, &output_path)?;

    Ok(EditOutput {
        bytes: fs::read(&output_path)?,
        file_name: sanitize_file_name(&settings.file_name, format),
        mime_type: format.mime_type(),
    })
}

/// Reads an [`ExportRequest`] from a JSON settings file.
pub fn load_export_request(path: &Path) -> CoreResult<ExportRequest> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        CoreError::JsonParseError(format!("export settings {}: {}", path.display(), e))
    })
}
