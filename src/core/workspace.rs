//! Workspace layout contract.
//!
//! A workspace root contains the directory tree the hub expects at startup,
//! plus `dems.db`. The logo is placed by the operator; `init` only prepares
//! the slot for it.

use crate::config::Config;
use crate::errors::AppResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Directories expected under the workspace root.
pub const LAYOUT_DIRS: [&str; 5] = [
    "templates",
    "static/css",
    "static/images",
    "uploads/pending",
    "uploads/avatars",
];

/// Where the operator drops the site logo.
pub const LOGO_FILE: &str = "static/images/logo.png";

/// Create the workspace directory tree. Existing directories are kept as-is.
/// Returns the directories that were actually created.
pub fn scaffold(root: &Path) -> AppResult<Vec<PathBuf>> {
    let mut created = Vec::new();

    for rel in LAYOUT_DIRS {
        let dir = root.join(rel);
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
            created.push(dir);
        }
    }

    Ok(created)
}

/// Directories missing from an existing workspace (empty when conformant).
pub fn missing_dirs(root: &Path) -> Vec<&'static str> {
    LAYOUT_DIRS
        .iter()
        .filter(|rel| !root.join(rel).is_dir())
        .copied()
        .collect()
}

/// The intake folder for new images.
pub fn pending_dir(cfg: &Config) -> PathBuf {
    Path::new(&cfg.workspace).join("uploads").join("pending")
}
