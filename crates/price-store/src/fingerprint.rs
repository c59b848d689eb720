use sha2::{Digest, Sha256};

use price_model::NewProduct;

/// Stable identity of a product row: sha256 over name, price, weight and
/// source file, hex encoded.
pub fn fingerprint(product: &NewProduct) -> String {
    let mut hasher = Sha256::new();
    hasher.update(product.name.as_bytes());
    hasher.update([0u8]);
    hasher.update(product.price.to_bits().to_le_bytes());
    hasher.update([0u8]);
    hasher.update(product.weight.to_bits().to_le_bytes());
    hasher.update([0u8]);
    hasher.update(product.source_file.as_bytes());
    hex::encode(hasher.finalize())
}
