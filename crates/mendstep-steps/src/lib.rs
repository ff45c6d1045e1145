//! Built-in behavioral steps and scenario runner.
//!
//! This crate supplies the step vocabulary the repair layer knows how to
//! heal (model assertions, page navigation, displayed-text assertions)
//! plus a [`ScenarioRunner`] that matches scenario lines against a
//! [`StepRegistry`] and drives each matched step through a
//! `HealingExecutor`.
//!
//! # Example
//!
//! ```rust,ignore
//! use mendstep_repair::RepairConfig;
//! use mendstep_steps::ScenarioRunner;
//!
//! let mut runner = ScenarioRunner::new(collaborators, &RepairConfig::default());
//! runner.run_scenario("widgets", &[
//!     "Given there are no widgets",
//!     "When I browse the list of widgets",
//!     r#"Then I should see the text "Hello world""#,
//! ])?;
//! ```

mod builtin;
mod error;
mod registry;
mod runner;
#[cfg(test)]
pub(crate) mod test_support;
mod world;

pub use builtin::register as register_builtin_steps;
pub use error::StepError;
pub use registry::{StepHandler, StepMatch, StepRegistry, strip_keyword};
pub use runner::{RunnerError, ScenarioRunner};
pub use world::World;
