// File: src/form_data.rs
// Purpose: Multi-value form submissions (urlencoded bodies and file parts)

use crate::config::ValidationConfig;
use crate::error::FormDataError;
use crate::source::Source;
use crate::value::{FileValue, Value};

/// A browser-style form submission
///
/// Keeps every `(key, value)` pair in submission order. Keys may repeat
/// (checkbox groups, multi-selects); [`get`](FormData::get) returns the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    entries: Vec<(String, Value)>,
}

impl FormData {
    /// Create empty form data
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` body
    pub fn parse(body: &str) -> Result<Self, FormDataError> {
        Self::parse_with(body, &ValidationConfig::default())
    }

    /// Parse an urlencoded body; values are trimmed when `trim_form_values` is set
    pub fn parse_with(body: &str, config: &ValidationConfig) -> Result<Self, FormDataError> {
        let trim = config.trim_form_values;
        let mut form = Self::new();

        for pair in body.split('&').filter(|pair| !pair.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));

            let key = decode_component(raw_key)
                .map_err(|_| FormDataError::InvalidKey(raw_key.to_string()))?;
            let value = decode_component(raw_value)
                .map_err(|_| FormDataError::InvalidValue { key: key.clone() })?;

            let value = if trim { value.trim().to_string() } else { value };
            form.append(key, value);
        }

        Ok(form)
    }

    /// Build from plain string fields, in iteration order
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut form = Self::new();
        for (key, value) in fields {
            form.append(key, value);
        }
        form
    }

    /// Append a string value; earlier values for the same key are kept
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .push((key.into(), Value::String(value.into())));
    }

    /// Append an uploaded file part
    pub fn append_file(&mut self, key: impl Into<String>, file: FileValue) {
        self.entries.push((key.into(), Value::File(file)));
    }

    /// First value submitted under `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Every value submitted under `key`, in submission order
    pub fn get_all(&self, key: &str) -> Vec<&Value> {
        self.entries
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v)
            .collect()
    }

    /// Check if a field exists
    pub fn has(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Distinct field names in first-seen order
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for (k, _) in &self.entries {
            if !keys.contains(&k.as_str()) {
                keys.push(k);
            }
        }
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Source for FormData {
    fn resolve(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

fn decode_component(raw: &str) -> Result<String, std::string::FromUtf8Error> {
    // '+' is a space in form encoding; urlencoding only handles percent escapes
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map(|decoded| decoded.into_owned())
}
