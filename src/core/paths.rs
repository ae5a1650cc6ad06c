//! Platform path helpers. Only the cache directory is used (TUI log file);
//! conversations are never written to disk.

use std::path::PathBuf;

use crate::core::app;

/// Project directories from the standard platform locations.
fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", "hayek", app::NAME)
}

/// Cache directory (~/.cache/hayek/).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}
