//! Numeric conversion for scraped counters.

/// Parse a scraped counter such as `1,234`, `1.234`, `1 234` or `300+`.
///
/// Grouping separators (comma, period, any whitespace) and a trailing `+` are
/// dropped before parsing. Anything that still is not a `u64` yields 0.
pub fn parse_count(raw: &str) -> u64 {
    let digits: String = raw
        .trim()
        .trim_end_matches('+')
        .chars()
        .filter(|c| !matches!(c, ',' | '.') && !c.is_whitespace())
        .collect();

    digits.parse::<u64>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::parse_count;

    #[test]
    fn strips_grouping_separators() {
        assert_eq!(parse_count("1,234"), 1234);
        assert_eq!(parse_count("1.234"), 1234);
        assert_eq!(parse_count("1 234"), 1234);
        assert_eq!(parse_count("1\u{a0}234"), 1234);
        assert_eq!(parse_count("12,345,678"), 12_345_678);
    }

    #[test]
    fn strips_plus_indicator() {
        assert_eq!(parse_count("300+"), 300);
        assert_eq!(parse_count(" 1,000+ "), 1000);
    }

    #[test]
    fn garbage_is_zero() {
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count("-5"), 0);
        assert_eq!(parse_count("99999999999999999999999"), 0);
    }
}
