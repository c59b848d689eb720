//! Price-list discovery in a folder.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// A candidate price list found in a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFile {
    pub path: PathBuf,
    /// Bare file name, recorded as provenance on every product.
    pub file_name: String,
}

/// Returns true for names that contain `price` and end in `.csv`.
///
/// Both checks are case-sensitive.
pub fn is_price_file(file_name: &str) -> bool {
    file_name.contains("price") && file_name.ends_with(".csv")
}

/// Lists the price lists in a directory.
///
/// Returns files sorted by file name.
pub fn list_price_files(dir: &Path) -> Result<Vec<PriceFile>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(raw_name) = path.file_name() else {
            continue;
        };
        // Invalid UTF-8 is replaced, the ASCII markers still match.
        let file_name = raw_name.to_string_lossy();
        if raw_name.to_str().is_none() {
            debug!(path = %path.display(), %file_name, "non UTF-8 file name");
        }

        if is_price_file(&file_name) {
            let file_name = file_name.into_owned();
            files.push(PriceFile { path, file_name });
        }
    }

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(files)
}
