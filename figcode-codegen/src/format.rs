//! Number formatting for generated code.

/// Format a dimension without trailing zeros ("12", "12.5", "0.33").
pub fn number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        let s = format!("{:.2}", rounded);
        s.trim_end_matches('0').to_string()
    }
}

/// Format a dimension as a Dart/Swift double literal ("12.0", "12.5").
pub fn double(value: f64) -> String {
    let n = number(value);
    if n.contains('.') { n } else { format!("{}.0", n) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number() {
        assert_eq!(number(12.0), "12");
        assert_eq!(number(12.5), "12.5");
        assert_eq!(number(1.0 / 3.0), "0.33");
        assert_eq!(number(-4.0), "-4");
        assert_eq!(number(0.0), "0");
    }

    #[test]
    fn test_double() {
        assert_eq!(double(12.0), "12.0");
        assert_eq!(double(0.5), "0.5");
    }
}
