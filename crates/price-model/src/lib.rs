pub mod diagnostics;
pub mod format;
pub mod mapping;
pub mod processing;
pub mod product;

pub use diagnostics::{RowError, SkipReason};
pub use format::{format_number, format_unit_price};
pub use mapping::{Field, HeaderMapping, ResolvedColumns};
pub use processing::{FailedFile, FileRowError, IngestReport, IngestedFile, SkippedFile};
pub use product::{NewProduct, ProductRecord};
