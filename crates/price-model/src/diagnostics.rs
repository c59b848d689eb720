//! Per-row and per-file ingestion problems.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mapping::Field;

/// A data row that could not be turned into a product.
///
/// `record` is the 1-based record number after the header row.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum RowError {
    #[error("record {record}: {field} value '{value}' is not a number")]
    InvalidNumber {
        record: u64,
        field: Field,
        value: String,
    },

    #[error("record {record}: no {field} cell")]
    MissingCell { record: u64, field: Field },

    #[error("record {record}: {field} value {value} is out of range")]
    OutOfRange { record: u64, field: Field, value: f64 },

    #[error("record {record}: {message}")]
    Malformed { record: u64, message: String },
}

impl RowError {
    pub fn record(&self) -> u64 {
        match self {
            Self::InvalidNumber { record, .. }
            | Self::MissingCell { record, .. }
            | Self::OutOfRange { record, .. }
            | Self::Malformed { record, .. } => *record,
        }
    }
}

/// Why a whole file produced no records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// At least one canonical field has no matching header.
    UnresolvedHeaders { missing: Vec<Field> },
    /// The file has no header row.
    Empty,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedHeaders { missing } => {
                let names: Vec<&str> = missing.iter().map(|field| field.as_str()).collect();
                write!(f, "no column for {}", names.join(", "))
            }
            Self::Empty => f.write_str("file is empty"),
        }
    }
}
