//! Source file discovery.

use crate::error::{ConstsyncError, Result};
use std::path::{Path, PathBuf};
use tracing::{trace, warn};
use walkdir::WalkDir;

pub const SOURCE_EXTENSION: &str = "php";

/// Recursively collects every PHP file beneath `root`, in filesystem
/// enumeration order. Fails when `root` is not a directory; unreadable
/// entries inside the tree are skipped with a warning.
pub fn php_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ConstsyncError::source_directory_missing(root));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
        {
            trace!("Discovered source file: {}", entry.path().display());
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
