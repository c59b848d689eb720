//! Price-list report generation.
//!
//! Renders stored products, in the order given, as a single HTML page with
//! one table. Row numbers are positions in that order, not store ids.

mod common;
mod html;

pub use common::{COLUMN_HEADERS, DEFAULT_OUTPUT_PATH, REPORT_TITLE};
pub use html::{ReportOptions, export, export_to_path};
