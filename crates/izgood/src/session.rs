// File: src/session.rs
// Purpose: Stateful validation session and the eager one-shot variant

use crate::config::ValidationConfig;
use crate::engine::evaluate_with;
use crate::error::FormDataError;
use crate::error_set::ErrorSet;
use crate::form_data::FormData;
use crate::rule::Rules;
use crate::source::Source;

/// Holds the most recent errors for one form
///
/// Rules are fixed for the lifetime of the session. Only `validate*` and
/// [`clear`](Session::clear) change the stored errors.
#[derive(Debug, Clone)]
pub struct Session {
    rules: Rules,
    config: ValidationConfig,
    errors: ErrorSet,
}

impl Session {
    pub fn new(rules: impl Into<Rules>) -> Self {
        Self::with_config(rules, ValidationConfig::default())
    }

    pub fn with_config(rules: impl Into<Rules>, config: ValidationConfig) -> Self {
        Self {
            rules: rules.into(),
            config,
            errors: ErrorSet::new(),
        }
    }

    /// Evaluate every rule and replace all stored errors.
    ///
    /// Returns `true` when no rule failed.
    pub fn validate<S: Source + ?Sized>(&mut self, source: &S) -> bool {
        let result = evaluate_with(source, &self.rules, &self.config);
        let valid = result.is_empty();

        tracing::debug!(
            rules = self.rules.len(),
            errors = result.len(),
            "validated all fields"
        );

        self.errors = result;
        valid
    }

    /// Evaluate every rule but only refresh the stored errors of `name`.
    ///
    /// Errors already stored for other fields are left untouched. The return
    /// value still reflects the whole evaluation: `false` if any rule failed,
    /// even one for another field.
    pub fn validate_field<S: Source + ?Sized>(&mut self, source: &S, name: &str) -> bool {
        let result = evaluate_with(source, &self.rules, &self.config);
        let valid = result.is_empty();

        tracing::debug!(
            rules = self.rules.len(),
            errors = result.len(),
            field = name,
            "validated single field"
        );

        self.errors.replace_field(name, &result);
        valid
    }

    /// Decode an urlencoded body with this session's configuration
    pub fn parse_form(&self, body: &str) -> Result<FormData, FormDataError> {
        FormData::parse_with(body, &self.config)
    }

    pub fn has_errors(&self, name: Option<&str>) -> bool {
        self.errors.has_errors(name)
    }

    pub fn messages(&self, name: Option<&str>) -> Vec<&str> {
        self.errors.messages(name)
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Drop all stored errors
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

/// Eager validation: evaluated once, on construction
///
/// For rendering paths that validate the current data on every pass and
/// have no use for scoped merges.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    errors: ErrorSet,
}

impl Validation {
    pub fn run<S: Source + ?Sized>(source: &S, rules: &Rules) -> Self {
        Self::run_with(source, rules, &ValidationConfig::default())
    }

    pub fn run_with<S: Source + ?Sized>(
        source: &S,
        rules: &Rules,
        config: &ValidationConfig,
    ) -> Self {
        Self {
            errors: evaluate_with(source, rules, config),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self, name: Option<&str>) -> bool {
        self.errors.has_errors(name)
    }

    pub fn messages(&self, name: Option<&str>) -> Vec<&str> {
        self.errors.messages(name)
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn into_errors(self) -> ErrorSet {
        self.errors
    }
}
