//! Drives scenario lines through the healing executor.

use tracing::{debug, info};

use mendstep_repair::{Collaborators, ExecError, HealingExecutor, RepairConfig};

use crate::registry::{StepRegistry, strip_keyword};
use crate::world::World;

/// Error surfaced when running scenario lines.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// No step definition matches the line.
    #[error("Undefined step: {0}")]
    Undefined(String),

    /// The step failed, possibly after a repair and retry.
    #[error(transparent)]
    Exec(#[from] ExecError),
}

/// Runs scenario lines: each line is matched against the step registry
/// and its handler is invoked through the healing executor, so a step
/// failing for a repairable reason is repaired and retried once.
///
/// The executor is wired in by composition (the runner hands each step
/// to it as a callback) rather than by intercepting any framework
/// internals. Repair state is scenario-scoped: [`run_scenario`] resets
/// both the world and the executor's repair context before its first
/// step.
///
/// [`run_scenario`]: ScenarioRunner::run_scenario
pub struct ScenarioRunner {
    registry: StepRegistry,
    executor: HealingExecutor,
    world: World,
}

impl ScenarioRunner {
    /// Runner with the built-in steps, rules, and repair actions.
    pub fn new(collaborators: Collaborators, config: &RepairConfig) -> Self {
        let executor = HealingExecutor::new(&collaborators, config);
        Self::with_parts(StepRegistry::with_builtin_steps(), executor, World::new(collaborators))
    }

    /// Runner assembled from custom parts.
    pub fn with_parts(registry: StepRegistry, executor: HealingExecutor, world: World) -> Self {
        Self {
            registry,
            executor,
            world,
        }
    }

    /// The scenario state.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The step registry.
    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    /// Run a single scenario line.
    pub fn run_step(&mut self, line: &str) -> Result<(), RunnerError> {
        let text = strip_keyword(line);
        let matched = self
            .registry
            .find(text)
            .ok_or_else(|| RunnerError::Undefined(text.to_string()))?;
        debug!(step = text, "running step");

        let world = &mut self.world;
        let handler = matched.handler;
        self.executor
            .invoke(|args| handler(&mut *world, args), &matched.args)?;
        Ok(())
    }

    /// Run scenario lines in order, stopping at the first failure.
    ///
    /// Blank lines and `#` comment lines are skipped. Per-scenario state
    /// (world scope, repair context) is reset first.
    pub fn run_scenario(&mut self, name: &str, lines: &[&str]) -> Result<(), RunnerError> {
        info!(scenario = name, "running scenario");
        self.world.reset();
        self.executor.reset_context();
        for line in lines {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.run_step(line)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for ScenarioRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScenarioRunner")
            .field("steps", &self.registry.len())
            .field("world", &self.world)
            .finish_non_exhaustive()
    }
}
