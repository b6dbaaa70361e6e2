mod csv;
mod fs_utils;
mod json;
pub mod logic;
mod model;
mod range;

pub use logic::ExportLogic;
pub use model::{ProjectExport, TaskExport};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for export runs.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}
