/// Parses a time key. Only finite numbers are accepted; anything else means the
/// row carries no usable time and is dropped by the loader.
pub fn parse_time(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parses a cell value. `None` is a gap: empty cells, text, and NaN all land here.
pub fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| !value.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_accepts_padded_and_exponent_forms() {
        assert_eq!(parse_time(" 10 "), Some(10.0));
        assert_eq!(parse_time("1e2"), Some(100.0));
        assert_eq!(parse_time("-0.5"), Some(-0.5));
    }

    #[test]
    fn time_rejects_non_finite_and_text() {
        assert_eq!(parse_time("NaN"), None);
        assert_eq!(parse_time("inf"), None);
        assert_eq!(parse_time("s"), None);
        assert_eq!(parse_time(""), None);
    }

    #[test]
    fn value_gaps() {
        assert_eq!(parse_value("bad"), None);
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("nan"), None);
        assert_eq!(parse_value("21"), Some(21.0));
        assert_eq!(parse_value("-inf"), Some(f64::NEG_INFINITY));
    }
}
