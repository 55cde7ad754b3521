// soundlab-cli/src/lib.rs
//
// Library portion of the SoundLab CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, CutArgs, ExportArgs, ProbeArgs};
pub use commands::cut::run_cut;
pub use commands::export::run_export;
pub use commands::probe::run_probe;
