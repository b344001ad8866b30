//! Configuration file reading and writing.

use crate::config::BenchConfig;
use crate::error::{Error, Result};
use serde::Serialize;
use std::path::Path;

/// Read a configuration document from a JSON file.
///
/// Fails if the file does not exist; callers that want the default
/// document must ask for it explicitly.
pub fn read_config(path: &Path) -> Result<BenchConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::ConfigRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    serde_json::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write a configuration document to a JSON file.
///
/// Serializes with 4-space indentation and non-ASCII characters kept
/// literal. Overwrites the target unconditionally; the parent directory
/// must already exist. No atomic replace, no backup.
pub fn write_config(config: &BenchConfig, path: &Path) -> Result<()> {
    // serde_json's default pretty printer indents with two spaces; the
    // on-disk format uses four.
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut contents = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut contents, formatter);
    config
        .serialize(&mut serializer)
        .map_err(|e| Error::ConfigSerialize { source: e })?;

    std::fs::write(path, contents).map_err(|e| Error::ConfigWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
