//! Value resolution
//!
//! A [`Source`] answers "what is the current value of field `name`?". Three
//! shapes are supported out of the box:
//!
//! - [`FormData`](crate::FormData): multi-value submission, first value per key
//! - flat records (`HashMap`/`BTreeMap` of [`Value`], or [`Flat`]): direct key lookup
//! - [`Value`] trees: nested-path lookup (`user.contact.email`, `user[contact][email]`)
//!
//! Resolution never fails loudly. A missing field is `None`, and the check
//! decides whether absence is acceptable.

use crate::value::Value;
use std::collections::{BTreeMap, HashMap};

/// Anything a rule's field value can be resolved from
pub trait Source {
    fn resolve(&self, name: &str) -> Option<&Value>;
}

impl<S: Source + ?Sized> Source for &S {
    fn resolve(&self, name: &str) -> Option<&Value> {
        (**self).resolve(name)
    }
}

impl Source for HashMap<String, Value> {
    fn resolve(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Source for BTreeMap<String, Value> {
    fn resolve(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Treats a [`Value`] object as a flat record: the field name is used as a
/// literal key, dots and brackets included.
#[derive(Debug, Clone, Copy)]
pub struct Flat<'a>(pub &'a Value);

impl Source for Flat<'_> {
    fn resolve(&self, name: &str) -> Option<&Value> {
        self.0.as_object()?.get(name)
    }
}

impl Source for Value {
    fn resolve(&self, name: &str) -> Option<&Value> {
        resolve_path(self, name)
    }
}

/// Normalize a field path to dotted segments.
///
/// `user[contact].email`, `user[contact][email]` and `.user.contact.email`
/// all become `["user", "contact", "email"]`.
pub fn path_segments(path: &str) -> Vec<String> {
    let dotted = path.replace('[', ".").replace(']', "");
    let dotted = dotted.strip_prefix('.').unwrap_or(&dotted);
    dotted.split('.').map(str::to_string).collect()
}

/// Walk `root` along `path`, stopping at the first missing segment.
pub fn resolve_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path_segments(path) {
        match current.child(&segment) {
            Some(next) => current = next,
            None => {
                tracing::trace!(path, segment = %segment, "path segment not found");
                return None;
            }
        }
    }
    Some(current)
}
