//! Requirements file reading.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a package requirements file.
///
/// # File Format
/// - One package reference per line (pip requirement syntax)
/// - Surrounding whitespace is trimmed
/// - Blank lines are ignored
/// - No comment syntax; order and duplicates are preserved
///
/// # Errors
/// - Returns error if file cannot be read
pub fn read_package_list(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| Error::PackagesRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let reader = BufReader::new(file);
    let mut packages = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| Error::PackagesRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let trimmed = line.trim();
        if !trimmed.is_empty() {
            packages.push(trimmed.to_string());
        }
    }

    Ok(packages)
}
