//! Rule model
//!
//! Rules are declared either with the builder (`Rule::new(..).message(..)`) or
//! in the compact tuple form `(name, check, message?, args?)`. Both shapes are
//! normalized into [`Rule`] once, when a [`Rules`] collection is built.

use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Outcome of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    /// The value is rejected, optionally with the check's own explanation
    Invalid(Option<String>),
}

impl Verdict {
    /// Reject with an explanation. An empty explanation counts as none.
    pub fn invalid(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        if reason.is_empty() {
            Verdict::Invalid(None)
        } else {
            Verdict::Invalid(Some(reason))
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

impl From<bool> for Verdict {
    fn from(ok: bool) -> Self {
        if ok {
            Verdict::Valid
        } else {
            Verdict::Invalid(None)
        }
    }
}

impl From<()> for Verdict {
    fn from(_: ()) -> Self {
        Verdict::Valid
    }
}

impl From<Option<String>> for Verdict {
    fn from(reason: Option<String>) -> Self {
        match reason {
            None => Verdict::Valid,
            Some(reason) => Verdict::invalid(reason),
        }
    }
}

impl From<Option<&str>> for Verdict {
    fn from(reason: Option<&str>) -> Self {
        Verdict::from(reason.map(str::to_string))
    }
}

impl From<Result<(), String>> for Verdict {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Verdict::Valid,
            Err(reason) => Verdict::invalid(reason),
        }
    }
}

type CheckFn = dyn Fn(Option<&Value>, Option<&Value>) -> Verdict + Send + Sync;

/// A pure check invoked with the resolved value and the rule's args
#[derive(Clone)]
pub struct Check(Arc<CheckFn>);

impl Check {
    /// Wrap a check that only looks at the value
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(Option<&Value>) -> R + Send + Sync + 'static,
        R: Into<Verdict>,
    {
        Self(Arc::new(
            move |value: Option<&Value>, _args: Option<&Value>| -> Verdict { f(value).into() },
        ))
    }

    /// Wrap a check that also receives the rule's args
    pub fn with_args<F, R>(f: F) -> Self
    where
        F: Fn(Option<&Value>, Option<&Value>) -> R + Send + Sync + 'static,
        R: Into<Verdict>,
    {
        Self(Arc::new(
            move |value: Option<&Value>, args: Option<&Value>| -> Verdict { f(value, args).into() },
        ))
    }

    pub fn call(&self, value: Option<&Value>, args: Option<&Value>) -> Verdict {
        (self.0)(value, args)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Check(..)")
    }
}

/// A named check targeting one field
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub check: Check,
    /// Overrides whatever the check reports when it fails
    pub message: Option<String>,
    pub args: Option<Value>,
}

impl Rule {
    pub fn new<F, R>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(Option<&Value>) -> R + Send + Sync + 'static,
        R: Into<Verdict>,
    {
        Self::from_check(name, Check::new(check))
    }

    pub fn with_args<F, R>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(Option<&Value>, Option<&Value>) -> R + Send + Sync + 'static,
        R: Into<Verdict>,
    {
        Self::from_check(name, Check::with_args(check))
    }

    pub fn from_check(name: impl Into<String>, check: Check) -> Self {
        Self {
            name: name.into(),
            check,
            message: None,
            args: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn args(mut self, args: impl Into<Value>) -> Self {
        self.args = Some(args.into());
        self
    }

    /// Run the check against an already resolved value
    pub fn run(&self, value: Option<&Value>) -> Verdict {
        self.check.call(value, self.args.as_ref())
    }
}

// Tuple declarations

impl<N, F, R> From<(N, F)> for Rule
where
    N: Into<String>,
    F: Fn(Option<&Value>) -> R + Send + Sync + 'static,
    R: Into<Verdict>,
{
    fn from((name, check): (N, F)) -> Self {
        Rule::new(name, check)
    }
}

impl<N, F, R, M> From<(N, F, M)> for Rule
where
    N: Into<String>,
    F: Fn(Option<&Value>) -> R + Send + Sync + 'static,
    R: Into<Verdict>,
    M: Into<String>,
{
    fn from((name, check, message): (N, F, M)) -> Self {
        Rule::new(name, check).message(message)
    }
}

impl<N, F, R, M, A> From<(N, F, Option<M>, A)> for Rule
where
    N: Into<String>,
    F: Fn(Option<&Value>, Option<&Value>) -> R + Send + Sync + 'static,
    R: Into<Verdict>,
    M: Into<String>,
    A: Into<Value>,
{
    fn from((name, check, message, args): (N, F, Option<M>, A)) -> Self {
        let rule = Rule::with_args(name, check).args(args);
        match message {
            Some(message) => rule.message(message),
            None => rule,
        }
    }
}

/// Normalized, ordered rule set
///
/// Cloning is cheap; checks are shared.
#[derive(Debug, Clone, Default)]
pub struct Rules {
    rules: Vec<Rule>,
}

impl Rules {
    pub fn new<I, T>(decls: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Rule>,
    {
        decls.into_iter().collect()
    }

    pub fn push(&mut self, rule: impl Into<Rule>) {
        self.rules.push(rule.into());
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn as_slice(&self) -> &[Rule] {
        &self.rules
    }
}

impl<T: Into<Rule>> FromIterator<T> for Rules {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<Rule>> for Rules {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl<'a> IntoIterator for &'a Rules {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
