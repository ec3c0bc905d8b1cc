//! Email checks

use izgood::{Value, Verdict};
use once_cell::sync::Lazy;
use regex::Regex;

// Deliberately loose: something@something.something, no whitespace
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

/// Basic email shape check
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Valid when the value is a string shaped like an email address
pub fn email(value: Option<&Value>) -> Verdict {
    value
        .and_then(Value::as_str)
        .map_or(false, is_valid_email)
        .into()
}
