//! JSON file output and input for pattern records and rule sets

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::io::error::{KolamError, Result};

/// Write a value as pretty-printed JSON, creating parent directories
///
/// # Errors
///
/// Returns an error if the directory cannot be created, the value cannot be
/// encoded or the file cannot be written
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| KolamError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|e| KolamError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source: e,
    })
}

/// Read and decode a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not decode as `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = std::fs::read_to_string(path).map_err(|e| KolamError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source: e,
    })?;
    Ok(serde_json::from_str(&json)?)
}
