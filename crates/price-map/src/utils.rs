/// Case-folds a header for comparison against the alias tables.
///
/// A leading UTF-8 byte order mark is dropped; nothing else is trimmed.
pub fn fold_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').to_lowercase()
}
