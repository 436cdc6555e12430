//! Formatting of numeric results.

/// The number of decimal places printed before trailing zeros are trimmed.
pub const DECIMAL_PLACES: usize = 6;

/// Formats a number with up to [`DECIMAL_PLACES`] decimal places, trimming trailing zeros and
/// a trailing decimal point.
///
/// Non-finite values print as `NaN`, `inf`, and `-inf`. Values that round to zero print as `0`
/// regardless of sign.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let fixed = format!("{:.*}", DECIMAL_PLACES, n);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(format_number(11.0), "11");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-2.25), "-2.25");
        assert_eq!(format_number(1024.0), "1024");
        assert_eq!(format_number(100.0), "100");
    }

    #[test]
    fn rounds_to_six_places() {
        assert_eq!(format_number(std::f64::consts::PI), "3.141593");
        assert_eq!(format_number(1.0 / 3.0), "0.333333");
        assert_eq!(format_number(1e-9), "0");
        assert_eq!(format_number(-1e-9), "0");
    }

    #[test]
    fn non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }
}
