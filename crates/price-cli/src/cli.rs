//! CLI argument definitions for the price-list analyzer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "price-analyzer",
    version,
    about = "Price-list analyzer - load supplier CSV price lists and rank products by unit price",
    long_about = "Load supplier price lists (CSV) from a folder, search products by name \
                  ranked by price per unit of weight, and export an HTML report.\n\n\
                  Files are picked up when their name contains \"price\" and ends in \".csv\"."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a folder, answer search queries interactively, then export the report.
    Run(RunArgs),

    /// Answer a single search query.
    Search(SearchArgs),

    /// Export the HTML report from an existing database.
    Export(ExportArgs),
}

#[derive(Args)]
pub struct StoreArgs {
    /// Product database file.
    #[arg(long = "db", value_name = "PATH", default_value = "prices.db")]
    pub db: PathBuf,

    /// Keep products in memory only (nothing is written to --db).
    #[arg(long = "in-memory")]
    pub in_memory: bool,

    /// Do not store a product again if the same name, price, weight and
    /// file were loaded before.
    #[arg(long = "dedupe")]
    pub dedupe: bool,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Folder with price lists (asked for when omitted).
    #[arg(value_name = "FOLDER")]
    pub folder: Option<PathBuf>,

    #[command(flatten)]
    pub store: StoreArgs,

    /// HTML report path.
    #[arg(long = "output", value_name = "PATH", default_value = price_report::DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// What to do with a row whose price or weight is not a valid number.
    #[arg(long = "on-row-error", value_enum, default_value = "abort-file")]
    pub on_row_error: RowErrorArg,

    /// Skip the HTML report on exit.
    #[arg(long = "no-export")]
    pub no_export: bool,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Text to look for in product names (case-insensitive).
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Load this folder before searching.
    #[arg(long = "folder", value_name = "FOLDER")]
    pub folder: Option<PathBuf>,

    #[command(flatten)]
    pub store: StoreArgs,

    /// What to do with a row whose price or weight is not a valid number.
    #[arg(long = "on-row-error", value_enum, default_value = "abort-file")]
    pub on_row_error: RowErrorArg,

    /// Print matches as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// HTML report path.
    #[arg(long = "output", value_name = "PATH", default_value = price_report::DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
}

/// Bad-row handling choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum RowErrorArg {
    /// Stop reading the file at the first bad row.
    AbortFile,
    /// Skip the bad row and keep reading.
    SkipRow,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
