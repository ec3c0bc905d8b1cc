//! Evaluation engine
//!
//! Runs every rule, in declaration order, against values resolved from a
//! [`Source`]. Evaluation is pure: the same rules over the same source
//! always produce the same [`ErrorSet`].

use crate::config::{ValidationConfig, DEFAULT_MESSAGE};
use crate::error_set::{ErrorSet, FieldError};
use crate::rule::{Rule, Verdict};
use crate::source::Source;

/// Evaluate `rules` against `source` with the default fallback message
pub fn evaluate<'r, S, I>(source: &S, rules: I) -> ErrorSet
where
    S: Source + ?Sized,
    I: IntoIterator<Item = &'r Rule>,
{
    evaluate_inner(source, rules, DEFAULT_MESSAGE)
}

/// Evaluate with the fallback message taken from `config`
pub fn evaluate_with<'r, S, I>(source: &S, rules: I, config: &ValidationConfig) -> ErrorSet
where
    S: Source + ?Sized,
    I: IntoIterator<Item = &'r Rule>,
{
    evaluate_inner(source, rules, &config.default_message)
}

fn evaluate_inner<'r, S, I>(source: &S, rules: I, default_message: &str) -> ErrorSet
where
    S: Source + ?Sized,
    I: IntoIterator<Item = &'r Rule>,
{
    let mut errors = ErrorSet::new();

    // No short-circuit: a field collects one error per failing rule
    for rule in rules {
        let value = source.resolve(&rule.name);
        if value.is_none() {
            tracing::trace!(field = %rule.name, "field not present in source");
        }

        if let Verdict::Invalid(reason) = rule.run(value) {
            let message = rule
                .message
                .clone()
                .or(reason)
                .unwrap_or_else(|| default_message.to_string());

            tracing::debug!(field = %rule.name, message = %message, "rule failed");
            errors.push(FieldError::new(rule.name.clone(), message));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rules;
    use crate::value::Value;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn always_valid(_: Option<&Value>) -> bool {
        true
    }

    fn always_invalid(_: Option<&Value>) -> bool {
        false
    }

    fn explains(_: Option<&Value>) -> Option<&'static str> {
        Some("Check says no")
    }

    fn present(value: Option<&Value>) -> bool {
        value.is_some()
    }

    fn record() -> HashMap<String, Value> {
        let mut record = HashMap::new();
        record.insert("name".to_string(), Value::from("Ada"));
        record
    }

    #[test]
    fn test_passing_rules_produce_nothing() {
        let rules = Rules::new(vec![
            Rule::new("name", always_valid),
            Rule::new("missing", always_valid),
        ]);
        assert!(evaluate(&record(), &rules).is_empty());
    }

    #[test]
    fn test_default_message() {
        let rules = Rules::new(vec![Rule::new("name", always_invalid)]);
        let errors = evaluate(&record(), &rules);
        assert_eq!(errors.messages(None), vec!["Invalid input"]);
    }

    #[test]
    fn test_check_reason_used_without_override() {
        let rules = Rules::new(vec![Rule::new("name", explains)]);
        let errors = evaluate(&record(), &rules);
        assert_eq!(errors.messages(Some("name")), vec!["Check says no"]);
    }

    #[test]
    fn test_rule_message_overrides_check_reason() {
        let rules = Rules::new(vec![
            Rule::new("name", explains).message("Override"),
            Rule::new("name", always_invalid).message("Override too"),
        ]);
        let errors = evaluate(&record(), &rules);
        assert_eq!(errors.messages(None), vec!["Override", "Override too"]);
    }

    #[test]
    fn test_all_rules_run_in_order() {
        let rules = Rules::new(vec![
            Rule::new("name", always_invalid).message("first"),
            Rule::new("other", present).message("other missing"),
            Rule::new("name", explains),
        ]);
        let errors = evaluate(&record(), &rules);

        assert_eq!(
            errors,
            ErrorSet::from(vec![
                FieldError::new("name", "first"),
                FieldError::new("other", "other missing"),
                FieldError::new("name", "Check says no"),
            ])
        );
        assert!(errors.len() <= rules.len());
    }

    #[test]
    fn test_configured_default_message() {
        let config = ValidationConfig {
            default_message: "Please fix this".to_string(),
            ..ValidationConfig::default()
        };
        let rules = Rules::new(vec![Rule::new("name", always_invalid)]);
        let errors = evaluate_with(&record(), &rules, &config);
        assert_eq!(errors.messages(None), vec!["Please fix this"]);
    }

    #[test]
    fn test_deterministic() {
        let rules = Rules::new(vec![
            Rule::new("name", explains),
            Rule::new("missing", present),
            Rule::new("name", always_invalid),
        ]);
        let source = record();
        let first = evaluate(&source, &rules);
        for _ in 0..10 {
            assert_eq!(evaluate(&source, &rules), first);
        }
    }

    #[test]
    fn test_accepts_rule_slices() {
        let rules = vec![Rule::new("missing", present)];
        let errors = evaluate(&record(), &rules);
        assert_eq!(errors.len(), 1);
    }
}
