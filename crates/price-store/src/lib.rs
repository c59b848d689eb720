//! Product persistence.
//!
//! Products are appended and never changed. Reads come back ordered by unit
//! price (`price / weight`) ascending, ties by id. Records whose weight is
//! not positive have no unit price and sort after all others.

mod error;
mod fingerprint;
mod schema;
mod sqlite;

pub use error::{Result, StoreError};
pub use fingerprint::fingerprint;
pub use sqlite::SqliteStore;

use serde::{Deserialize, Serialize};

use price_model::{NewProduct, ProductRecord};

/// Whether repeated inserts of the same product are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DedupMode {
    /// Every insert adds a row.
    #[default]
    KeepAll,
    /// A product already stored with the same name, price, weight and
    /// source file is not inserted again.
    Fingerprint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted { id: i64 },
    Duplicate { existing_id: i64 },
}

impl InsertOutcome {
    pub fn id(self) -> i64 {
        match self {
            Self::Inserted { id } => id,
            Self::Duplicate { existing_id } => existing_id,
        }
    }
}

/// Storage sink for normalized products.
///
/// Implementations are single-caller; wrap them in a lock to share.
pub trait ProductStore {
    /// Appends a product and assigns it the next id.
    fn insert(&mut self, product: NewProduct) -> Result<InsertOutcome>;

    /// Products whose name contains `query`, ignoring case, in unit-price
    /// order. An empty query matches everything.
    fn search(&self, query: &str) -> Result<Vec<ProductRecord>>;

    /// All products in unit-price order.
    fn all_ordered(&self) -> Result<Vec<ProductRecord>>;

    fn count(&self) -> Result<usize>;
}
