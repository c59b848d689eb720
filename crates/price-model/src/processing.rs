use serde::{Deserialize, Serialize};

use crate::diagnostics::{RowError, SkipReason};

/// A price list whose headers resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestedFile {
    pub file: String,
    /// Rows stored from this file.
    pub records: usize,
    /// Rows already present in the store and not stored again.
    pub duplicates: usize,
    /// Rows rejected by parsing.
    pub rejected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub file: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRowError {
    pub file: String,
    pub error: RowError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedFile {
    pub file: String,
    pub message: String,
}

/// Outcome of loading one folder of price lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngestReport {
    /// Files whose headers resolved, in processing order.
    pub files: Vec<IngestedFile>,
    pub skipped: Vec<SkippedFile>,
    pub row_errors: Vec<FileRowError>,
    /// Files that could not be opened or decoded.
    pub failed: Vec<FailedFile>,
}

impl IngestReport {
    pub fn inserted(&self) -> usize {
        self.files.iter().map(|file| file.records).sum()
    }

    pub fn duplicates(&self) -> usize {
        self.files.iter().map(|file| file.duplicates).sum()
    }

    pub fn has_problems(&self) -> bool {
        !self.skipped.is_empty() || !self.row_errors.is_empty() || !self.failed.is_empty()
    }
}
