//! CLI library components for the price-list analyzer.

pub mod logging;
pub mod pipeline;
pub mod prompt;
pub mod session;
pub mod summary;
