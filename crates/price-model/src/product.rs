//! Product records as produced by ingestion and returned by the store.

use serde::{Deserialize, Serialize};

/// A normalized product row that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub weight: f64,
    /// File name the row was read from (provenance).
    pub source_file: String,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        weight: f64,
        source_file: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            weight,
            source_file: source_file.into(),
        }
    }

    /// Price per unit of weight, `None` when weight is not positive.
    #[must_use]
    pub fn unit_price(&self) -> Option<f64> {
        unit_price(self.price, self.weight)
    }
}

/// A stored product. `id` is assigned by the store and never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub weight: f64,
    pub source_file: String,
}

impl ProductRecord {
    pub fn from_new(id: i64, product: NewProduct) -> Self {
        Self {
            id,
            name: product.name,
            price: product.price,
            weight: product.weight,
            source_file: product.source_file,
        }
    }

    /// Price per unit of weight, `None` when weight is not positive.
    #[must_use]
    pub fn unit_price(&self) -> Option<f64> {
        unit_price(self.price, self.weight)
    }
}

fn unit_price(price: f64, weight: f64) -> Option<f64> {
    if weight > 0.0 {
        Some(price / weight)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_price_divides_by_weight() {
        let bread = NewProduct::new("Bread", 50.0, 0.5, "a.csv");
        assert_eq!(bread.unit_price(), Some(100.0));
    }

    #[test]
    fn unit_price_absent_for_non_positive_weight() {
        let record = ProductRecord::from_new(1, NewProduct::new("Air", 10.0, 0.0, "a.csv"));
        assert_eq!(record.unit_price(), None);
        let record = ProductRecord::from_new(2, NewProduct::new("Hole", 10.0, -1.0, "a.csv"));
        assert_eq!(record.unit_price(), None);
    }
}
