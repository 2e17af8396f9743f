//! File helpers for reflowing text documents.

use std::{fs, path::Path};

use crate::wrap_to;

/// Read `path` and return its text reflowed to `width`.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn reflow_file(path: &Path, width: usize) -> std::io::Result<String> {
    let text = fs::read_to_string(path)?;
    Ok(wrap_to(&text, width))
}

/// Rewrite a file in place with its text reflowed to `width`.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite(path: &Path, width: usize) -> std::io::Result<()> {
    let fixed = reflow_file(path, width)?;
    fs::write(path, fixed + "\n")
}
