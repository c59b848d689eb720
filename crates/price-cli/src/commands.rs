use std::io;

use anyhow::{Context, Result};
use serde::Serialize;

use price_cli::pipeline::load_folder;
use price_cli::prompt::{NOT_FOUND_MESSAGE, REPORT_SAVED_MESSAGE};
use price_cli::session::{SessionOptions, export_report, run_session};
use price_cli::summary::{print_ingest_summary, results_table};
use price_ingest::{IngestOptions, RowErrorPolicy};
use price_model::ProductRecord;
use price_store::{DedupMode, ProductStore, SqliteStore};

use crate::cli::{ExportArgs, RowErrorArg, RunArgs, SearchArgs, StoreArgs};

pub fn run_interactive(args: &RunArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let mut store = open_store(&args.store)?;
    let options = SessionOptions {
        folder: args.folder.clone(),
        ingest: ingest_options(args.on_row_error),
        report_path: (!args.no_export).then(|| args.output.clone()),
    };
    run_session(&mut store, &options, &mut input, &mut output)?;
    Ok(())
}

#[derive(Serialize)]
struct SearchHit<'a> {
    position: usize,
    #[serde(flatten)]
    record: &'a ProductRecord,
    unit_price: Option<f64>,
}

pub fn run_search(args: &SearchArgs) -> Result<()> {
    let mut store = open_store(&args.store)?;
    if let Some(folder) = &args.folder {
        let report = load_folder(folder, &mut store, &ingest_options(args.on_row_error))?;
        if !args.json {
            print_ingest_summary(&report);
        }
    }

    let results = store.search(&args.query)?;
    if args.json {
        let hits: Vec<SearchHit<'_>> = results
            .iter()
            .enumerate()
            .map(|(idx, record)| SearchHit {
                position: idx + 1,
                record,
                unit_price: record.unit_price(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else if results.is_empty() {
        println!("{NOT_FOUND_MESSAGE}");
    } else {
        println!("{}", results_table(&results));
    }
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let store = open_store(&args.store)?;
    export_report(&store, &args.output)?;
    println!("{REPORT_SAVED_MESSAGE} {}", args.output.display());
    Ok(())
}

fn open_store(args: &StoreArgs) -> Result<SqliteStore> {
    let store = if args.in_memory {
        SqliteStore::in_memory().context("open in-memory product store")?
    } else {
        SqliteStore::open(&args.db)?
    };
    let dedup = if args.dedupe {
        DedupMode::Fingerprint
    } else {
        DedupMode::KeepAll
    };
    Ok(store.with_dedup(dedup)?)
}

fn ingest_options(arg: RowErrorArg) -> IngestOptions {
    let policy = match arg {
        RowErrorArg::AbortFile => RowErrorPolicy::AbortFile,
        RowErrorArg::SkipRow => RowErrorPolicy::SkipRow,
    };
    IngestOptions::default().with_row_error_policy(policy)
}
