//! Error types
//!
//! Failed checks are not errors; they end up in an [`ErrorSet`](crate::ErrorSet).
//! This covers the plumbing around evaluation: decoding submissions.

/// Errors raised while decoding a form submission
#[derive(Debug, thiserror::Error)]
pub enum FormDataError {
    #[error("Field name is not valid UTF-8 after decoding: {0}")]
    InvalidKey(String),

    #[error("Value of field '{key}' is not valid UTF-8 after decoding")]
    InvalidValue { key: String },
}
