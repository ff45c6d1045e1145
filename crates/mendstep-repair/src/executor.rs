//! The healing executor: run a step, repair at most once, retry once.

use tracing::debug;

use crate::args::StepArgs;
use crate::collab::Collaborators;
use crate::config::RepairConfig;
use crate::context::RepairContext;
use crate::error::{ExecError, StepFailure};
use crate::registry::RepairRegistry;
use crate::repair::RepairSet;

/// Wraps the execution of a single behavioral-test step.
///
/// On failure, the failure message is classified; when a repair action is
/// registered for the failure kind, it is applied and the step is retried
/// exactly once. Unclassified failures, repair failures, and retry
/// failures all propagate to the caller with their message text intact;
/// this layer never swallows a failure.
///
/// The executor wraps a step-running callback by composition; it is not an
/// interception layer over some framework's own invocation path. One
/// executor serves one scenario at a time: its [`RepairContext`] is plain
/// owned state.
pub struct HealingExecutor {
    registry: RepairRegistry,
    repairs: RepairSet,
    context: RepairContext,
}

impl HealingExecutor {
    /// Executor with the built-in rules and repair actions.
    pub fn new(collaborators: &Collaborators, config: &RepairConfig) -> Self {
        Self::with_parts(
            RepairRegistry::with_default_rules(),
            RepairSet::builtin(collaborators, config),
        )
    }

    /// Executor with custom rules and actions.
    pub fn with_parts(registry: RepairRegistry, repairs: RepairSet) -> Self {
        Self {
            registry,
            repairs,
            context: RepairContext::new(),
        }
    }

    /// The repair context.
    pub fn context(&self) -> &RepairContext {
        &self.context
    }

    /// Mutable access to the repair context.
    pub fn context_mut(&mut self) -> &mut RepairContext {
        &mut self.context
    }

    /// Clear the repair context, e.g. between scenarios.
    pub fn reset_context(&mut self) {
        self.context.reset();
    }

    /// Invoke `step` with `args`, repairing and retrying at most once.
    ///
    /// - First attempt succeeds: its result is returned unchanged; this
    ///   layer introduces no side effects on the success path.
    /// - Failure classifies as `Generic` (or no action is registered for
    ///   its kind): the original failure is re-raised; no retry.
    /// - Repair fails: the repair error is raised; no retry.
    /// - After a successful repair the step runs exactly once more, and
    ///   its outcome is final: even a new, classifiable failure is not
    ///   repaired again.
    pub fn invoke<T, F>(&mut self, mut step: F, args: &StepArgs) -> Result<T, ExecError>
    where
        F: FnMut(&StepArgs) -> Result<T, StepFailure>,
    {
        let failure = match step(args) {
            Ok(value) => return Ok(value),
            Err(failure) => failure,
        };

        let signal = self.registry.classify(failure.message());
        let (kind, capture) = match (signal.kind(), signal.capture()) {
            (Some(kind), Some(capture)) => (kind, capture.to_string()),
            _ => return Err(ExecError::Step(failure)),
        };
        let Some(action) = self.repairs.get(kind) else {
            return Err(ExecError::Step(failure));
        };

        debug!(action = action.name(), capture = %capture, "repairing failed step");
        action.apply(&capture, &mut self.context)?;

        // One retry only; a second failure propagates as-is.
        step(args).map_err(ExecError::Step)
    }
}

impl std::fmt::Debug for HealingExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealingExecutor")
            .field("rules", &self.registry.len())
            .field("repairs", &self.repairs)
            .field("context", &self.context)
            .finish()
    }
}
