//! Implementation of the 'probe' subcommand.

use crate::cli::ProbeArgs;
use crate::commands::read_input;
use crate::error::{CliErrorContext, CliResult};
use crate::terminal;

use soundlab_core::external::{CrateFfprobeExecutor, FfprobeExecutor, check_dependency};
use soundlab_core::{format_bytes, format_duration};

/// Prints the duration and size of the input file.
pub fn run_probe(args: ProbeArgs) -> CliResult<()> {
    let input = read_input(&args.input_path)?;
    check_dependency("ffprobe")?;

    let duration = CrateFfprobeExecutor::new()
        .get_duration(&input.path)
        .cli_context("Failed to read the duration")?;

    terminal::print_section("Probe");
    terminal::print_status("Input", &input.path.display().to_string(), false);
    terminal::print_status("Duration", &format_duration(duration), true);
    terminal::print_status("Size", &format_bytes(input.bytes.len() as u64), false);
    Ok(())
}
