//! File logging for long-running or scripted use.
//!
//! The CLI logs to the terminal through `env_logger` by default. When a log
//! directory is given it installs the log4rs configuration from [`setup`]
//! instead, which writes to a timestamped file and mirrors to stderr.

pub mod setup;

pub use setup::{log_file_name, setup_file_logging};
