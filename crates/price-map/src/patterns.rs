use price_model::Field;

/// Header aliases for the product name column.
pub const NAME_CANDIDATES: &[&str] = &["название", "продукт", "товар", "наименование"];

/// Header aliases for the price column.
pub const PRICE_CANDIDATES: &[&str] = &["цена", "розница"];

/// Header aliases for the weight (pack size) column.
pub const WEIGHT_CANDIDATES: &[&str] = &["фасовка", "масса", "вес"];

/// Returns the alias table for a field. Entries are already case-folded.
pub fn candidates(field: Field) -> &'static [&'static str] {
    match field {
        Field::Name => NAME_CANDIDATES,
        Field::Price => PRICE_CANDIDATES,
        Field::Weight => WEIGHT_CANDIDATES,
    }
}
