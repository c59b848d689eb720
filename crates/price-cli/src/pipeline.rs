//! Folder ingestion stage: discover price lists, read rows, store products.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use price_ingest::{IngestOptions, ingest_with_options, list_price_files};
use price_model::{FailedFile, FileRowError, IngestReport, IngestedFile, SkippedFile};
use price_store::{InsertOutcome, ProductStore};

/// Loads every price list in `folder` into `store`.
///
/// Problems confined to one file (unresolved headers, unreadable file, bad
/// rows) are collected in the report and never stop other files. Storage
/// failures abort the load.
pub fn load_folder<S: ProductStore + ?Sized>(
    folder: &Path,
    store: &mut S,
    options: &IngestOptions,
) -> Result<IngestReport> {
    let start = Instant::now();
    let files = list_price_files(folder)
        .with_context(|| format!("list price lists in {}", folder.display()))?;
    info!(
        folder = %folder.display(),
        file_count = files.len(),
        "discovered price lists"
    );

    let mut report = IngestReport::default();
    for file in files {
        let span = info_span!("file", file = %file.file_name);
        let _guard = span.enter();

        let rows = match ingest_with_options(&file.path, &file.file_name, options) {
            Ok(rows) => rows,
            Err(error) => {
                warn!(%error, "price list could not be read");
                report.failed.push(FailedFile {
                    file: file.file_name,
                    message: error.to_string(),
                });
                continue;
            }
        };

        if let Some(reason) = rows.skip_reason().cloned() {
            warn!(%reason, "price list skipped");
            report.skipped.push(SkippedFile {
                file: file.file_name,
                reason,
            });
            continue;
        }

        let mut summary = IngestedFile {
            file: file.file_name.clone(),
            ..IngestedFile::default()
        };
        for row in rows {
            match row {
                Ok(product) => {
                    let outcome = store
                        .insert(product)
                        .with_context(|| format!("store products from {}", file.file_name))?;
                    match outcome {
                        InsertOutcome::Inserted { .. } => summary.records += 1,
                        InsertOutcome::Duplicate { .. } => summary.duplicates += 1,
                    }
                }
                Err(error) => {
                    summary.rejected += 1;
                    report.row_errors.push(FileRowError {
                        file: file.file_name.clone(),
                        error,
                    });
                }
            }
        }
        debug!(
            records = summary.records,
            duplicates = summary.duplicates,
            rejected = summary.rejected,
            "price list loaded"
        );
        report.files.push(summary);
    }

    info!(
        folder = %folder.display(),
        loaded = report.files.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        records = report.inserted(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(report)
}
