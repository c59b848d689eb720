//! Interactive session: load a folder, answer queries, export the report.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use price_ingest::IngestOptions;
use price_model::IngestReport;
use price_report::{ReportOptions, export_to_path};
use price_store::ProductStore;

use crate::pipeline::load_folder;
use crate::prompt::{REPORT_SAVED_MESSAGE, prompt_for_folder, run_prompt_loop};
use crate::summary::print_ingest_summary;

/// Settings for one interactive session.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Folder to load; asked for on `input` when absent.
    pub folder: Option<PathBuf>,
    pub ingest: IngestOptions,
    /// Where the report is written once the loop ends. `None` disables it.
    pub report_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct SessionOutcome {
    pub ingest: IngestReport,
    pub answered: usize,
    pub report_path: Option<PathBuf>,
}

/// Runs a full session against `store`.
///
/// The report is exported after the search loop ends, whether by `exit`
/// or end of input.
pub fn run_session<S, R, W>(
    store: &mut S,
    options: &SessionOptions,
    input: &mut R,
    output: &mut W,
) -> Result<SessionOutcome>
where
    S: ProductStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let folder = match &options.folder {
        Some(folder) => folder.clone(),
        None => prompt_for_folder(input, output)?,
    };
    let ingest = load_folder(&folder, store, &options.ingest)?;
    print_ingest_summary(&ingest);

    let answered = run_prompt_loop(&*store, input, output)?;
    info!(answered, "search session finished");

    if let Some(path) = &options.report_path {
        export_report(&*store, path)?;
        writeln!(output, "{REPORT_SAVED_MESSAGE} {}", path.display())?;
    }
    Ok(SessionOutcome {
        ingest,
        answered,
        report_path: options.report_path.clone(),
    })
}

/// Writes every stored product, in unit-price order, to an HTML report.
pub fn export_report<S: ProductStore + ?Sized>(store: &S, output: &Path) -> Result<()> {
    let records = store.all_ordered().context("read products for report")?;
    let options = ReportOptions::default().with_generated_at(Local::now().naive_local());
    export_to_path(&records, output, &options)
        .with_context(|| format!("export report to {}", output.display()))
}
