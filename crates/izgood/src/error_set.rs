// File: src/error_set.rs
// Purpose: Field errors produced by an evaluation pass and their queries

use serde::Serialize;
use std::collections::HashMap;

/// One failing rule: the field it targets and the message to show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub name: String,
    pub message: String,
}

impl FieldError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Ordered field errors, in rule evaluation order
///
/// A field may appear several times when several of its rules fail. The set
/// never collapses them; picking the first one is up to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorSet {
    errors: Vec<FieldError>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Whether any error is stored, optionally only for `name`
    pub fn has_errors(&self, name: Option<&str>) -> bool {
        match name {
            Some(name) => self.errors.iter().any(|e| e.name == name),
            None => !self.errors.is_empty(),
        }
    }

    /// Messages in order, optionally only for `name`
    pub fn messages(&self, name: Option<&str>) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| name.map_or(true, |name| e.name == name))
            .map(|e| e.message.as_str())
            .collect()
    }

    /// First message for a field
    pub fn first(&self, name: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.message.as_str())
    }

    pub fn for_field<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.name == name)
    }

    /// Distinct field names in first-seen order
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for e in &self.errors {
            if !names.contains(&e.name.as_str()) {
                names.push(&e.name);
            }
        }
        names
    }

    /// Group messages by field, keeping per-field order
    pub fn to_field_map(&self) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for e in &self.errors {
            map.entry(e.name.clone())
                .or_default()
                .push(e.message.clone());
        }
        map
    }

    /// Replace the stored errors for `name` with the entries of `fresh` that
    /// target `name`. Errors for other fields stay where they are.
    pub fn replace_field(&mut self, name: &str, fresh: &ErrorSet) {
        self.errors.retain(|e| e.name != name);
        self.errors
            .extend(fresh.for_field(name).cloned());
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn into_result(self) -> Result<(), ErrorSet> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<Vec<FieldError>> for ErrorSet {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<FieldError> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ErrorSet {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorSet {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
