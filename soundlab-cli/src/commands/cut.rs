//! Implementation of the 'cut' subcommand.

use crate::cli::CutArgs;
use crate::commands::{core_config, read_input};
use crate::error::{CliErrorContext, CliResult};
use crate::terminal;

use soundlab_core::edit::guards::validate_cut_request;
use soundlab_core::external::{CrateFfprobeExecutor, SidecarSpawner};
use soundlab_core::{Region, check_engine, cut_audio, format_bytes};

use log::debug;
use std::path::PathBuf;
use std::time::Instant;

/// Removes the requested region and writes `cut.wav` to the output directory.
pub fn run_cut(args: CutArgs, temp_dir: Option<PathBuf>) -> CliResult<()> {
    let started = Instant::now();
    let input = read_input(&args.input_path)?;
    let region = Region::new(args.start, args.end);

    validate_cut_request(&input.bytes, &region)?;
    let config = core_config(temp_dir)?;
    check_engine()?;

    terminal::print_section("Cut");
    terminal::print_status("Input", &input.path.display().to_string(), false);
    terminal::print_status("Remove", &region.to_string(), false);

    let spinner = terminal::start_spinner("Cutting region");
    let result = cut_audio(
        &SidecarSpawner,
        &CrateFfprobeExecutor::new(),
        &config,
        &input.bytes,
        &input.extension,
        region,
    );
    spinner.finish_and_clear();
    let output = result?;

    let saved = output
        .save_in(&args.output_dir)
        .cli_with_context(|| format!("Failed to write {}", output.file_name))?;
    debug!("Cut finished in {:.2?}", started.elapsed());

    terminal::print_success("Region removed");
    terminal::print_status("Output", &saved.display().to_string(), true);
    terminal::print_status("Size", &format_bytes(output.bytes.len() as u64), false);
    Ok(())
}
