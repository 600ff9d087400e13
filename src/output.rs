//! Output path resolution: destination directory handling and the mapping
//! from sheet names to file names.

use crate::error::SplitError;
use std::fs;
use std::path::{Path, PathBuf};

const OUTPUT_EXTENSION: &str = "xlsx";
const INVALID_FILE_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];
const FALLBACK_FILE_STEM: &str = "sheet";

// Windows device names, invalid as a file stem regardless of extension.
const RESERVED_FILE_STEMS: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Ensures `dir` exists and returns the joined path `<dir>/<sheet_name>.xlsx`.
///
/// An already-existing directory is success; any other creation failure is an
/// error. The sheet name is sanitized for the filesystem; the name inside the
/// output workbook keeps the original text.
pub fn resolve_output_path(dir: &Path, sheet_name: &str) -> Result<PathBuf, SplitError> {
    fs::create_dir_all(dir).map_err(|error| SplitError::CreateOutputDir {
        path: dir.to_path_buf(),
        source: error,
    })?;
    let stem = sanitize_file_name(sheet_name);
    Ok(dir.join(format!("{stem}.{OUTPUT_EXTENSION}")))
}

/// Replaces filesystem-invalid characters with `_`, strips trailing dots, and
/// sidesteps Windows device names; an empty result falls back to a fixed stem
/// so every sheet maps to some file name.
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_control() || INVALID_FILE_NAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();
    // Windows rejects names ending in a dot or space.
    let trimmed = cleaned.trim().trim_end_matches('.').trim_end();
    if trimmed.is_empty() {
        return FALLBACK_FILE_STEM.to_string();
    }
    if RESERVED_FILE_STEMS
        .iter()
        .any(|stem| trimmed.eq_ignore_ascii_case(stem))
    {
        return format!("{trimmed}_");
    }
    trimmed.to_string()
}
