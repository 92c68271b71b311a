use std::path::PathBuf;

use directories::ProjectDirs;

/// Returns the root storefront directory path.
///
/// Resolution order:
/// 1. `STOREFRONT_ROOT` environment variable (if set)
/// 2. Platform data directory (e.g. `~/.local/share/storefront`)
/// 3. Current working directory + `.storefront`
pub fn storefront_root() -> PathBuf {
    if let Ok(root) = std::env::var("STOREFRONT_ROOT")
        && !root.is_empty()
    {
        return PathBuf::from(root);
    }

    ProjectDirs::from("", "", "storefront")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".storefront"))
}

/// Returns the path to the configuration file.
pub fn config_path() -> PathBuf {
    storefront_root().join("config.yaml")
}

/// Returns the path to the durable key/value storage file.
pub fn storage_path() -> PathBuf {
    storefront_root().join("storage.json")
}

/// Returns the path the TUI writes its log records to.
pub fn log_path() -> PathBuf {
    storefront_root().join("storefront.log")
}
