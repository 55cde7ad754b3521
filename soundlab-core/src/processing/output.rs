//! Output artifacts and their file names.

use crate::edit::AudioFormat;
use crate::error::CoreResult;

use std::fs;
use std::path::{Path, PathBuf};

/// File name of every cut result.
pub const CUT_FILE_NAME: &str = "cut.wav";

/// Base name used when a requested export name is blank.
pub const DEFAULT_EXPORT_STEM: &str = "soundlab_export";

/// The bytes produced by a cut or export, with the name and MIME type to
/// deliver them under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutput {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: &'static str,
}

impl EditOutput {
    /// Writes the bytes to `dir/file_name`, creating `dir` if needed.
    pub fn save_in(&self, dir: &Path) -> CoreResult<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Turns a caller-supplied name into a safe file name for `format`.
///
/// Only the last path component is kept, with `/` and `\` both treated as
/// separators. A blank name becomes `soundlab_export.<ext>`. A missing or
/// different extension (compared case-insensitively) is replaced by the
/// format's.
pub fn sanitize_file_name(requested: &str, format: AudioFormat) -> String {
    let expected = format.extension();

    let name = requested.rsplit(['/', '\\']).next().unwrap_or("").trim();
    if name.is_empty() || name == "." || name == ".." {
        return format!("{DEFAULT_EXPORT_STEM}.{expected}");
    }

    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            if ext.eq_ignore_ascii_case(expected) {
                name.to_string()
            } else {
                format!("{stem}.{expected}")
            }
        }
        _ => format!("{name}.{expected}"),
    }
}
