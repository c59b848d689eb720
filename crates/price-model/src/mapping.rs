//! Column mapping between a price-list header row and the canonical fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical product fields every price list has to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Price,
    Weight,
}

impl Field {
    /// All fields in resolution order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Price, Field::Weight];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Weight => "weight",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column positions found for each field in one file's header row.
///
/// Built fresh per file and discarded once the file has been read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderMapping {
    pub name_index: Option<usize>,
    pub price_index: Option<usize>,
    pub weight_index: Option<usize>,
}

impl HeaderMapping {
    pub fn index(&self, field: Field) -> Option<usize> {
        match field {
            Field::Name => self.name_index,
            Field::Price => self.price_index,
            Field::Weight => self.weight_index,
        }
    }

    pub fn set(&mut self, field: Field, index: Option<usize>) {
        match field {
            Field::Name => self.name_index = index,
            Field::Price => self.price_index = index,
            Field::Weight => self.weight_index = index,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete().is_some()
    }

    /// Unresolved fields, in [`Field::ALL`] order.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.index(*field).is_none())
            .collect()
    }

    /// Returns the resolved positions when all three fields are present.
    pub fn complete(&self) -> Option<ResolvedColumns> {
        Some(ResolvedColumns {
            name: self.name_index?,
            price: self.price_index?,
            weight: self.weight_index?,
        })
    }
}

/// Column positions of a fully resolved header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub name: usize,
    pub price: usize,
    pub weight: usize,
}

impl ResolvedColumns {
    pub fn index(&self, field: Field) -> usize {
        match field {
            Field::Name => self.name,
            Field::Price => self.price,
            Field::Weight => self.weight,
        }
    }
}
