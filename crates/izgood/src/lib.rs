// izgood - rule-based validation for form submissions and nested records
// Rules are evaluated against a data source; failures become field errors

pub mod config;
pub mod engine;
pub mod error;
pub mod error_set;
pub mod form_data;
pub mod rule;
pub mod session;
pub mod source;
pub mod value;

// Re-export core types
pub use config::{ValidationConfig, DEFAULT_MESSAGE};
pub use engine::{evaluate, evaluate_with};
pub use error::FormDataError;
pub use error_set::{ErrorSet, FieldError};
pub use form_data::FormData;
pub use rule::{Check, Rule, Rules, Verdict};
pub use session::{Session, Validation};
pub use source::{resolve_path, Flat, Source};
pub use value::{FileValue, Value};
