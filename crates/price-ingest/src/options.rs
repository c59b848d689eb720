use serde::{Deserialize, Serialize};

/// How far a bad data row reaches.
///
/// Neither policy lets a bad row affect other files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowErrorPolicy {
    /// Stop reading the current file at the first bad row. Rows read
    /// before it are still produced.
    #[default]
    AbortFile,
    /// Report the bad row and continue with the next one.
    SkipRow,
}

/// Options for reading a single price list.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestOptions {
    pub on_row_error: RowErrorPolicy,
}

impl IngestOptions {
    /// Set the bad-row policy.
    #[must_use]
    pub fn with_row_error_policy(mut self, policy: RowErrorPolicy) -> Self {
        self.on_row_error = policy;
        self
    }
}
