pub const PRODUCTS_SQL: &str = "
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    price REAL,
    weight REAL,
    file TEXT
);
";

pub const FINGERPRINTS_SQL: &str = "
CREATE TABLE IF NOT EXISTS product_fingerprints (
    fingerprint TEXT PRIMARY KEY,
    product_id INTEGER NOT NULL REFERENCES products(id)
);
";

/// Unicode lower-casing; SQLite's own `lower()` only folds ASCII.
pub const CASEFOLD_FN: &str = "casefold";

/// Unit-price ordering: positive weights first by `price / weight`, then
/// records without a unit price, then by id.
const ORDER_BY: &str = "ORDER BY CASE WHEN weight > 0 THEN 0 ELSE 1 END,
         CASE WHEN weight > 0 THEN price / weight END,
         id";

pub fn search_sql() -> String {
    format!(
        "SELECT id, name, price, weight, file FROM products
         WHERE ?1 = '' OR instr({CASEFOLD_FN}(name), ?1) > 0
         {ORDER_BY}"
    )
}

pub fn all_sql() -> String {
    format!("SELECT id, name, price, weight, file FROM products {ORDER_BY}")
}
