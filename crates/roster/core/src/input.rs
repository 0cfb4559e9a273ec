//! Lenient numeric parsing for free-form text fields.

/// Parses the leading integer of `text` the way a forgiving form field does:
/// leading whitespace is skipped, an optional sign is accepted, and digits are
/// read until the first non-digit. Returns `None` if no digit was found.
/// Values beyond the `i64` range saturate.
pub fn parse_integer(text: &str) -> Option<i64> {
    let rest = text.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: i64 = 0;
    let mut seen = false;
    for digit in digits {
        seen = true;
        let digit = i64::from(digit - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    seen.then_some(value)
}

/// Resolves an optional initial-score field, defaulting to 0.
pub fn parse_score_or_zero(text: &str) -> i64 {
    parse_integer(text).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_signed_integers() {
        assert_eq!(parse_integer("42"), Some(42));
        assert_eq!(parse_integer("-7"), Some(-7));
        assert_eq!(parse_integer("+3"), Some(3));
        assert_eq!(parse_integer("  10 "), Some(10));
    }

    #[test]
    fn stops_at_first_non_digit() {
        assert_eq!(parse_integer("12abc"), Some(12));
        assert_eq!(parse_integer("3.9"), Some(3));
        assert_eq!(parse_integer("-0x10"), Some(0));
    }

    #[test]
    fn rejects_text_without_leading_digits() {
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer("-"), None);
        assert_eq!(parse_integer("- 5"), None);
    }

    #[test]
    fn saturates_out_of_range_values() {
        assert_eq!(parse_integer("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_integer("-99999999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn missing_score_defaults_to_zero() {
        assert_eq!(parse_score_or_zero(""), 0);
        assert_eq!(parse_score_or_zero("n/a"), 0);
        assert_eq!(parse_score_or_zero("15"), 15);
    }
}
