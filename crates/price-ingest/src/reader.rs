//! Lazy CSV row reader producing normalized products.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use tracing::{debug, warn};

use price_model::{Field, HeaderMapping, NewProduct, ResolvedColumns, RowError, SkipReason};

use crate::error::{IngestError, Result};
use crate::options::{IngestOptions, RowErrorPolicy};

/// Single-pass iterator over the products of one price list.
///
/// Yields one item per data row. When the header row does not resolve the
/// iterator is empty and [`ProductRows::skip_reason`] says why.
pub struct ProductRows {
    file_name: String,
    mapping: HeaderMapping,
    columns: Option<ResolvedColumns>,
    skip: Option<SkipReason>,
    records: Option<StringRecordsIntoIter<File>>,
    record_number: u64,
    policy: RowErrorPolicy,
    halted: bool,
}

/// Opens a price list with default options.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its header row cannot
/// be decoded.
pub fn ingest(path: &Path, file_name: &str) -> Result<ProductRows> {
    ingest_with_options(path, file_name, &IngestOptions::default())
}

/// Opens a price list and resolves its header row.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its header row cannot
/// be decoded.
pub fn ingest_with_options(
    path: &Path,
    file_name: &str,
    options: &IngestOptions,
) -> Result<ProductRows> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    let mut records = reader.into_records();

    let mut rows = ProductRows {
        file_name: file_name.to_string(),
        mapping: HeaderMapping::default(),
        columns: None,
        skip: None,
        records: None,
        record_number: 0,
        policy: options.on_row_error,
        halted: false,
    };

    let headers = match records.next() {
        None => {
            debug!(file = %file_name, "empty price list");
            rows.skip = Some(SkipReason::Empty);
            return Ok(rows);
        }
        Some(result) => result.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?,
    };

    rows.mapping = price_map::resolve(&headers.iter().collect::<Vec<_>>());
    match rows.mapping.complete() {
        Some(columns) => {
            rows.columns = Some(columns);
            rows.records = Some(records);
        }
        None => {
            let missing = rows.mapping.missing_fields();
            debug!(file = %file_name, ?missing, "header row did not resolve");
            rows.skip = Some(SkipReason::UnresolvedHeaders { missing });
        }
    }
    Ok(rows)
}

impl ProductRows {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mapping(&self) -> HeaderMapping {
        self.mapping
    }

    /// Why this file yields no rows, if it was skipped.
    pub fn skip_reason(&self) -> Option<&SkipReason> {
        self.skip.as_ref()
    }

    pub fn is_skipped(&self) -> bool {
        self.skip.is_some()
    }
}

impl Iterator for ProductRows {
    type Item = std::result::Result<NewProduct, RowError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        let columns = self.columns?;
        let result = self.records.as_mut()?.next()?;
        self.record_number += 1;

        let item = match result {
            Ok(record) => parse_row(&record, columns, self.record_number, &self.file_name),
            Err(err) => {
                // I/O errors repeat on every call; never retry them.
                if err.is_io_error() {
                    self.halted = true;
                }
                Err(RowError::Malformed {
                    record: self.record_number,
                    message: err.to_string(),
                })
            }
        };

        if let Err(error) = &item {
            warn!(file = %self.file_name, %error, "bad price-list row");
            if self.policy == RowErrorPolicy::AbortFile {
                self.halted = true;
            }
        }
        Some(item)
    }
}

fn parse_row(
    record: &StringRecord,
    columns: ResolvedColumns,
    record_number: u64,
    file_name: &str,
) -> std::result::Result<NewProduct, RowError> {
    let name = cell(record, columns, Field::Name, record_number)?.trim();
    let price = parse_number(record, columns, Field::Price, record_number)?;
    if price < 0.0 {
        return Err(RowError::OutOfRange {
            record: record_number,
            field: Field::Price,
            value: price,
        });
    }
    let weight = parse_number(record, columns, Field::Weight, record_number)?;
    if weight <= 0.0 {
        return Err(RowError::OutOfRange {
            record: record_number,
            field: Field::Weight,
            value: weight,
        });
    }
    Ok(NewProduct::new(name, price, weight, file_name))
}

fn cell<'r>(
    record: &'r StringRecord,
    columns: ResolvedColumns,
    field: Field,
    record_number: u64,
) -> std::result::Result<&'r str, RowError> {
    record
        .get(columns.index(field))
        .ok_or(RowError::MissingCell {
            record: record_number,
            field,
        })
}

fn parse_number(
    record: &StringRecord,
    columns: ResolvedColumns,
    field: Field,
    record_number: u64,
) -> std::result::Result<f64, RowError> {
    let raw = cell(record, columns, field, record_number)?;
    let value: f64 = raw.trim().parse().map_err(|_| RowError::InvalidNumber {
        record: record_number,
        field,
        value: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(RowError::OutOfRange {
            record: record_number,
            field,
            value,
        });
    }
    // "-0" parses to negative zero; store and fingerprint it as 0.
    Ok(if value == 0.0 { 0.0 } else { value })
}
