use price_model::{Field, HeaderMapping};
use tracing::debug;

use crate::patterns::candidates;
use crate::utils::fold_header;

/// Resolves the name, price and weight columns of a header row.
///
/// Fields without a matching header are left as `None`.
pub fn resolve<S: AsRef<str>>(headers: &[S]) -> HeaderMapping {
    let folded: Vec<String> = headers
        .iter()
        .map(|header| fold_header(header.as_ref()))
        .collect();
    let mut mapping = HeaderMapping::default();
    for field in Field::ALL {
        let aliases = candidates(field);
        let index = folded
            .iter()
            .position(|header| aliases.contains(&header.as_str()));
        mapping.set(field, index);
    }
    debug!(
        name = ?mapping.name_index,
        price = ?mapping.price_index,
        weight = ?mapping.weight_index,
        "resolved header row"
    );
    mapping
}

/// Classifies a single header, if it is an alias of any field.
pub fn field_for_header(header: &str) -> Option<Field> {
    let folded = fold_header(header);
    Field::ALL
        .into_iter()
        .find(|field| candidates(*field).contains(&folded.as_str()))
}
