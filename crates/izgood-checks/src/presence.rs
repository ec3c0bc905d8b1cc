//! Presence checks

use izgood::{Value, Verdict};

/// Valid for non-blank strings and non-empty files.
///
/// Whitespace-only strings, empty files, absent values and every other
/// value type are invalid.
pub fn not_empty(value: Option<&Value>) -> Verdict {
    let ok = match value {
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::File(file)) => file.size > 0,
        _ => false,
    };
    ok.into()
}
