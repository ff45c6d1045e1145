//! Ordered failure-message classification rules.

use regex::Regex;

use crate::signal::{FailureSignal, RepairKind};

/// A single classification rule: a pattern with one capture group, plus
/// the repair kind a match maps to.
#[derive(Debug, Clone)]
pub struct RepairRule {
    kind: RepairKind,
    pattern: Regex,
}

impl RepairRule {
    /// Compile a rule from a pattern with exactly one capture group.
    pub fn new(kind: RepairKind, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            kind,
            pattern: Regex::new(pattern)?,
        })
    }

    /// The repair kind this rule maps to.
    pub fn kind(&self) -> RepairKind {
        self.kind
    }
}

/// Maps failure-message text to a [`FailureSignal`].
///
/// Rules are tried in insertion order and the first match wins.
/// Classification is a pure function: no state is read or mutated, and the
/// same message always yields the same signal.
///
/// The built-in rules anchor their captures to the literal trailing
/// punctuation or quote at the end of the message, so error text that
/// continues past the assertion sentence does not classify.
#[derive(Debug, Clone)]
pub struct RepairRegistry {
    rules: Vec<RepairRule>,
}

impl RepairRegistry {
    /// Registry with no rules; every message classifies as `Generic`.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Registry with the three built-in rules.
    pub fn with_default_rules() -> Self {
        let mut registry = Self::empty();
        for (kind, pattern) in [
            (RepairKind::MissingModel, r"No model found called (.+?)\.$"),
            (RepairKind::MissingRoute, r"No URL pattern found matching /(.+?)\.$"),
            (
                RepairKind::MissingContent,
                r#"The text "(.+?)" was not found in the current page$"#,
            ),
        ] {
            let rule = RepairRule::new(kind, pattern).expect("built-in classification pattern");
            registry.push(rule);
        }
        registry
    }

    /// Append a rule. Later rules only apply when no earlier rule matches.
    pub fn push(&mut self, rule: RepairRule) {
        self.rules.push(rule);
    }

    /// Classify a failure message.
    pub fn classify(&self, message: &str) -> FailureSignal {
        for rule in &self.rules {
            if let Some(caps) = rule.pattern.captures(message)
                && let Some(capture) = caps.get(1)
            {
                return rule.kind.signal(capture.as_str());
            }
        }
        FailureSignal::Generic
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RepairRegistry {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
