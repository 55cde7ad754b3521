// ============================================================================
// soundlab-cli/src/main.rs
// ============================================================================
//
// MAIN ENTRY POINT: SoundLab CLI Application
//
// Parses arguments, installs logging, dispatches to the subcommand and maps
// failures to exit code 1 with a message on stderr.

use clap::Parser;
use soundlab_cli::logging::init_logging;
use soundlab_cli::{Cli, Commands, run_cut, run_export, run_probe, terminal};
use soundlab_core::CoreError;
use std::process;

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Cut(_) => "cut",
        Commands::Export(_) => "export",
        Commands::Probe(_) => "probe",
    }
}

fn suggestion_for(error: &CoreError) -> Option<&'static str> {
    match error {
        CoreError::Validation(_) => Some("Check the region, speed and volume values"),
        CoreError::DependencyNotFound(_) => Some("Install ffmpeg and make sure it is on PATH"),
        _ => None,
    }
}

fn main() {
    let cli = Cli::parse();
    let name = command_name(&cli.command);

    let result = init_logging(name, cli.verbose, cli.log_dir.as_deref()).and_then(|log_file| {
        if let Some(path) = log_file {
            log::info!("Log file: {}", path.display());
        }
        match cli.command {
            Commands::Cut(args) => run_cut(args, cli.temp_dir),
            Commands::Export(args) => run_export(args, cli.temp_dir),
            Commands::Probe(args) => run_probe(args),
        }
    });

    if let Err(e) = result {
        log::error!("{name} failed: {e}");
        terminal::print_error(
            &format!("{name} failed"),
            &e.to_string(),
            suggestion_for(&e),
        );
        process::exit(1);
    }
}
