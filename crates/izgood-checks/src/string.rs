//! String checks

use izgood::{Value, Verdict};
use regex::Regex;

fn text(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str)
}

/// At least `min` characters
pub fn min_length(min: usize) -> impl Fn(Option<&Value>) -> Verdict + Send + Sync + Clone + 'static {
    move |value: Option<&Value>| match text(value) {
        Some(s) if s.chars().count() >= min => Verdict::Valid,
        _ => Verdict::invalid(format!("Must be at least {} characters", min)),
    }
}

/// At most `max` characters
pub fn max_length(max: usize) -> impl Fn(Option<&Value>) -> Verdict + Send + Sync + Clone + 'static {
    move |value: Option<&Value>| match text(value) {
        Some(s) if s.chars().count() <= max => Verdict::Valid,
        _ => Verdict::invalid(format!("Must be at most {} characters", max)),
    }
}

/// Valid when the pattern matches somewhere in the string value.
///
/// The pattern is compiled here, so a bad pattern surfaces when the rule is
/// declared rather than on every evaluation.
pub fn matches(
    pattern: &str,
) -> Result<impl Fn(Option<&Value>) -> Verdict + Send + Sync + Clone + 'static, regex::Error> {
    let regex = Regex::new(pattern)?;
    Ok(move |value: Option<&Value>| {
        Verdict::from(text(value).map_or(false, |s| regex.is_match(s)))
    })
}

/// Valid when the string value is one of `allowed`
pub fn one_of<I, S>(allowed: I) -> impl Fn(Option<&Value>) -> Verdict + Send + Sync + Clone + 'static
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
    move |value: Option<&Value>| {
        Verdict::from(text(value).map_or(false, |s| allowed.iter().any(|a| a == s)))
    }
}

/// Valid when the value equals the rule's args
pub fn equals_arg(value: Option<&Value>, args: Option<&Value>) -> Verdict {
    match (value, args) {
        (Some(value), Some(expected)) => (value == expected).into(),
        _ => Verdict::Invalid(None),
    }
}
