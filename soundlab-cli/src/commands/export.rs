//! Implementation of the 'export' subcommand.

use crate::cli::ExportArgs;
use crate::commands::{core_config, read_input};
use crate::error::{CliErrorContext, CliResult};
use crate::terminal;

use soundlab_core::edit::guards::check_source;
use soundlab_core::external::{CrateFfprobeExecutor, SidecarSpawner};
use soundlab_core::{
    ExportRequest, ExportSettings, check_engine, export_with_settings, format_bytes,
    load_export_request,
};

use log::debug;
use std::path::PathBuf;

/// Builds the export request from the settings file (if any) and the flags.
pub fn build_request(args: &ExportArgs) -> CliResult<ExportRequest> {
    let base = match &args.settings {
        Some(path) => load_export_request(path)
            .cli_with_context(|| format!("Failed to load settings '{}'", path.display()))?,
        None => ExportRequest::default(),
    };
    Ok(args.merge_into(base))
}

fn describe(settings: &ExportSettings) -> String {
    let mut parts = vec![settings.format().to_string()];
    if let Some(region) = settings.region {
        parts.push(format!("region {region}"));
    }
    if (settings.volume() - 1.0).abs() > f64::EPSILON {
        parts.push(format!("volume x{}", settings.volume()));
    }
    if settings.fade_in().is_some() {
        parts.push("fade in".to_string());
    }
    if settings.fade_out().is_some() {
        parts.push("fade out".to_string());
    }
    if (settings.speed() - 1.0).abs() > f64::EPSILON {
        parts.push(format!("speed x{}", settings.speed()));
    }
    parts.join(", ")
}

/// Re-encodes the input with the requested transforms.
pub fn run_export(args: ExportArgs, temp_dir: Option<PathBuf>) -> CliResult<()> {
    let input = read_input(&args.input_path)?;
    let request = build_request(&args)?;

    let config = core_config(temp_dir)?;
    check_source(&input.bytes)?;
    let settings = request.compile(&config.export_defaults)?;
    debug!("Compiled export settings: {:?}", settings);
    check_engine()?;

    terminal::print_section("Export");
    terminal::print_status("Input", &input.path.display().to_string(), false);
    terminal::print_status("Settings", &describe(&settings), false);

    let spinner = terminal::start_spinner("Encoding");
    let result = export_with_settings(
        &SidecarSpawner,
        &CrateFfprobeExecutor::new(),
        &config,
        &input.bytes,
        &input.extension,
        &settings,
    );
    spinner.finish_and_clear();
    let output = result?;

    let saved = output
        .save_in(&args.output_dir)
        .cli_with_context(|| format!("Failed to write {}", output.file_name))?;

    terminal::print_success("Export complete");
    terminal::print_status("Output", &saved.display().to_string(), true);
    terminal::print_status("Type", output.mime_type, false);
    terminal::print_status("Size", &format_bytes(output.bytes.len() as u64), false);
    Ok(())
}
