//! I/O helpers shared by the decoder, renderer and binaries.
//!
//! - `read_lines`: read a text file into trimmed lines for the decoder.
//! - `write_json_file`: pretty-print a serializable value to disk.
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// Read a file into a vector of lines with trailing `\n`/`\r\n` removed.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect())
}

/// Serialize `value` as pretty JSON and write it to `path`.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
