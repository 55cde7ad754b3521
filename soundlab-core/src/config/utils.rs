//! Configuration utility functions
//!
//! Helpers for reading typed values from environment variables. An unset
//! or unparsable variable yields the default.

use std::path::PathBuf;

/// Get an optional path from an environment variable. Empty counts as unset.
pub fn get_env_opt_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|val| !val.is_empty())
        .map(PathBuf::from)
}

/// Get a u32 value from an environment variable or use the default
pub fn get_env_u32(key: &str, default: u32) -> u32 {
    match std::env::var(key) {
        Ok(val) => val.trim().parse().unwrap_or(default),
        Err(_) => default,
    }
}
