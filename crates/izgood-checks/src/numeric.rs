//! Numeric checks

use izgood::{Value, Verdict};

/// Parse the leading integer of a string the way browsers do for form input.
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit. A `0x`/`0X` prefix switches to hexadecimal. `"42px"` is 42,
/// `"  -7"` is -7, `"0x1F"` is 31, `"px42"`, `"0x"` and `""` are `None`.
pub fn parse_leading_int(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut number: Option<f64> = None;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        number = Some(number.unwrap_or(0.0) * f64::from(radix) + f64::from(digit));
    }

    number.map(|n| sign * n)
}

/// Valid when the value is a number, or a numeric string, strictly greater than `min`
pub fn more_than(min: f64) -> impl Fn(Option<&Value>) -> Verdict + Send + Sync + Clone + 'static {
    move |value: Option<&Value>| {
        let number = match value {
            Some(Value::Number(n)) => Some(*n),
            Some(Value::String(s)) => parse_leading_int(s),
            _ => None,
        };

        match number {
            Some(n) if !n.is_nan() => Verdict::from(n > min),
            _ => Verdict::Invalid(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42", Some(42.0))]
    #[case("  42", Some(42.0))]
    #[case("-7", Some(-7.0))]
    #[case("+3", Some(3.0))]
    #[case("42px", Some(42.0))]
    #[case("3.9", Some(3.0))]
    #[case("px42", None)]
    #[case("", None)]
    #[case("-", None)]
    #[case("0x1F", Some(31.0))]
    #[case("0X1f", Some(31.0))]
    #[case("-0x10", Some(-16.0))]
    #[case("0x1Fg", Some(31.0))]
    #[case("0x", None)]
    #[case("0xZ", None)]
    #[case("0", Some(0.0))]
    fn test_parse_leading_int(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_leading_int(input), expected);
    }

    #[test]
    fn test_more_than_numbers() {
        let check = more_than(18.0);
        assert!(check(Some(&Value::from(19))).is_valid());
        assert!(!check(Some(&Value::from(18))).is_valid());
        assert!(!check(Some(&Value::Number(f64::NAN))).is_valid());
    }

    #[test]
    fn test_more_than_strings() {
        let check = more_than(0.0);
        assert!(check(Some(&Value::from("5"))).is_valid());
        assert!(check(Some(&Value::from("5 apples"))).is_valid());
        assert!(!check(Some(&Value::from("0"))).is_valid());
        assert!(!check(Some(&Value::from("abc"))).is_valid());
        assert!(check(Some(&Value::from("0x10"))).is_valid());
        assert!(!check(Some(&Value::from("0x"))).is_valid());
    }

    #[test]
    fn test_more_than_other_values() {
        let check = more_than(0.0);
        assert_eq!(check(None), Verdict::Invalid(None));
        assert_eq!(check(Some(&Value::Null)), Verdict::Invalid(None));
        assert_eq!(check(Some(&Value::Bool(true))), Verdict::Invalid(None));
    }
}
