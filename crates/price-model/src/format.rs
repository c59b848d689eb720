//! Display formatting shared by the terminal table and the HTML report.

/// Placeholder shown when a unit price cannot be computed.
pub const MISSING_VALUE: &str = "—";

/// Formats a price or weight: whole numbers keep one decimal place
/// (`50.0`), everything else uses the shortest round-trip form.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Formats a unit price with two decimals.
pub fn format_unit_price(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => MISSING_VALUE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_keep_one_decimal() {
        assert_eq!(format_number(50.0), "50.0");
        assert_eq!(format_number(0.0), "0.0");
    }

    #[test]
    fn fractions_use_shortest_form() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(89.99), "89.99");
    }

    #[test]
    fn unit_price_two_decimals() {
        assert_eq!(format_unit_price(Some(100.0)), "100.00");
        assert_eq!(format_unit_price(Some(1.0 / 3.0)), "0.33");
        assert_eq!(format_unit_price(None), "—");
    }
}
