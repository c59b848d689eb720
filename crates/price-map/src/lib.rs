//! Price-list header resolution.
//!
//! Suppliers name their columns differently ("Наименование", "Товар",
//! "Розница", "Фасовка", ...). This crate maps a header row to the column
//! positions of the canonical name, price and weight fields.
//!
//! Matching is exact after case folding; there is no fuzzy or partial
//! matching. For every field the leftmost matching header wins.
//!
//! ```
//! use price_map::resolve;
//!
//! let mapping = resolve(&["Товар", "Вес", "Цена"]);
//! assert_eq!(mapping.name_index, Some(0));
//! assert_eq!(mapping.price_index, Some(2));
//! assert_eq!(mapping.weight_index, Some(1));
//! ```

mod patterns;
mod resolver;
mod utils;

pub use patterns::{NAME_CANDIDATES, PRICE_CANDIDATES, WEIGHT_CANDIDATES, candidates};
pub use resolver::{field_for_header, resolve};
pub use utils::fold_header;
