//! Matching step text to handlers.

use std::sync::Arc;

use regex::Regex;

use mendstep_repair::{StepArgs, StepFailure};

use crate::world::World;

/// A step body: runs against the world with the captured arguments.
pub type StepHandler = Arc<dyn Fn(&mut World, &StepArgs) -> Result<(), StepFailure> + Send + Sync>;

/// A registered step definition.
struct StepDef {
    pattern: Regex,
    handler: StepHandler,
}

/// A matched step: the handler plus the arguments captured from the text.
#[derive(Clone)]
pub struct StepMatch {
    /// The matched step's handler.
    pub handler: StepHandler,
    /// Captures extracted from the step text, in order.
    pub args: StepArgs,
}

/// Registry of step definitions; patterns are matched against the whole
/// step text (keyword already stripped) and the first match wins.
#[derive(Default)]
pub struct StepRegistry {
    steps: Vec<StepDef>,
}

impl StepRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-loaded with the built-in steps.
    pub fn with_builtin_steps() -> Self {
        let mut registry = Self::new();
        crate::builtin::register(&mut registry);
        registry
    }

    /// Register a step. The pattern is implicitly anchored to the whole
    /// text; capture groups become the step's positional arguments.
    pub fn register(
        &mut self,
        pattern: &str,
        handler: StepHandler,
    ) -> Result<(), regex::Error> {
        let anchored = format!("^(?:{pattern})$");
        self.steps.push(StepDef {
            pattern: Regex::new(&anchored)?,
            handler,
        });
        Ok(())
    }

    /// Find the first step definition matching `text`.
    pub fn find(&self, text: &str) -> Option<StepMatch> {
        for def in &self.steps {
            if let Some(caps) = def.pattern.captures(text) {
                let captures = caps
                    .iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str().to_string())
                    .collect();
                return Some(StepMatch {
                    handler: Arc::clone(&def.handler),
                    args: StepArgs::new(captures),
                });
            }
        }
        None
    }

    /// Number of registered steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no steps are registered.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl std::fmt::Debug for StepRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let patterns: Vec<&str> = self.steps.iter().map(|d| d.pattern.as_str()).collect();
        f.debug_struct("StepRegistry")
            .field("patterns", &patterns)
            .finish()
    }
}

/// Strip a leading Gherkin keyword from a scenario line.
pub fn strip_keyword(line: &str) -> &str {
    let trimmed = line.trim();
    for keyword in ["Given ", "When ", "Then ", "And ", "But "] {
        if let Some(rest) = trimmed.strip_prefix(keyword) {
            return rest.trim_start();
        }
    }
    trimmed
}
