//! Price-list ingestion.
//!
//! This crate finds price-list CSV files in a folder and turns their rows
//! into [`NewProduct`](price_model::NewProduct) values.
//!
//! # Features
//!
//! - **Discovery**: files whose name contains `price` and ends in `.csv`
//! - **Header resolution**: via [`price_map::resolve`]; files that do not
//!   name all three canonical columns are skipped with a [`SkipReason`]
//! - **Lazy rows**: [`ProductRows`] reads one record at a time and reports
//!   bad rows as [`RowError`] values scoped by a [`RowErrorPolicy`]
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use price_ingest::{ingest, list_price_files};
//!
//! for file in list_price_files(Path::new("prices"))? {
//!     let rows = ingest(&file.path, &file.file_name)?;
//!     for row in rows {
//!         println!("{:?}", row);
//!     }
//! }
//! ```
//!
//! [`SkipReason`]: price_model::SkipReason
//! [`RowError`]: price_model::RowError

mod discovery;
mod error;
mod options;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{PriceFile, is_price_file, list_price_files};

// === Row Reading ===
pub use options::{IngestOptions, RowErrorPolicy};
pub use reader::{ProductRows, ingest, ingest_with_options};
