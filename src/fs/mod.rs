//! Simple file I/O utilities

use crate::error::{Result, StorefrontError};
use std::path::Path;

/// Read file content with error handling
pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| StorefrontError::StorageError {
        operation: "read",
        item_type: "file",
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read file content, treating a missing file as `None`
pub fn read_file_if_exists(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StorefrontError::StorageError {
            operation: "read",
            item_type: "file",
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Write file atomically using temp file and rename.
///
/// Either the new content is fully written or the original file remains
/// unchanged.
pub fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;

    let temp_path = path.with_extension("tmp");

    std::fs::write(&temp_path, content).map_err(|e| StorefrontError::StorageError {
        operation: "write",
        item_type: "file",
        path: temp_path.clone(),
        source: e,
    })?;

    std::fs::rename(&temp_path, path).map_err(|e| StorefrontError::StorageError {
        operation: "rename",
        item_type: "file",
        path: path.to_path_buf(),
        source: e,
    })
}

/// Ensure parent directory exists
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| StorefrontError::StorageError {
            operation: "create",
            item_type: "directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}
