//! Data folder listing.

use crate::error::{Result, VisualizerError};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension a file must carry to be offered for loading.
pub const CSV_EXTENSION: &str = ".csv";

/// Name of the data folder that sits next to the executable.
pub const DATA_DIR_NAME: &str = "data";

/// Default data directory: `data/` next to the running executable.
pub fn default_data_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// List the CSV files in `dir`, in directory order.
///
/// Only regular files whose name ends with [`CSV_EXTENSION`] are returned;
/// subdirectories are skipped even when their name matches.
pub fn list_csv_files(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(VisualizerError::data_dir_missing(dir));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.ends_with(CSV_EXTENSION) {
            continue;
        }
        // Follows symlinks, so a link to a CSV file is listed too.
        if !entry.path().is_file() {
            continue;
        }
        files.push(name);
    }

    tracing::debug!("Found {} CSV files in {}", files.len(), dir.display());
    Ok(files)
}
