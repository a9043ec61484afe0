//! Number - canonical CSS number formatting

/// Decimal places kept when a component is written to CSS.
pub const PRECISION: usize = 6;

/// Format a number for CSS output.
///
/// Rounds to [`PRECISION`] decimal places, strips trailing zeros and a
/// dangling decimal point, and folds `-0` into `0`.
pub fn format_number(value: f64) -> String {
    let mut out = format!("{:.*}", PRECISION, value);
    if out.contains('.') {
        let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(trimmed);
    }
    if out == "-0" {
        out = "0".to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_have_no_decimal_point() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-50.0), "-50");
    }

    #[test]
    fn rounds_to_six_places() {
        assert_eq!(format_number(std::f64::consts::FRAC_1_SQRT_2), "0.707107");
        assert_eq!(format_number(0.98102), "0.98102");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-1e-12), "0");
        assert_eq!(format_number(6.123e-17), "0");
    }
}
