//! Self-healing execution of behavioral-test steps.
//!
//! Wraps the execution of a single test step with a repair loop of depth
//! one: when a step fails, the failure message is matched against an
//! ordered rule set, the missing artifact (a data model, a routable page,
//! or displayed content) is synthesized through external collaborators,
//! and the step is retried exactly once.
//!
//! The collaborators (scaffolding generator, persistence/schema engine,
//! routing engine, browsing driver) are consumed through the narrow
//! traits in [`collab`]; everything behind them is out of scope.
//!
//! # Example
//!
//! ```rust,ignore
//! use mendstep_repair::{Collaborators, HealingExecutor, RepairConfig, StepArgs, StepFailure};
//!
//! let mut executor = HealingExecutor::new(&collaborators, &RepairConfig::default());
//! let args = StepArgs::new(vec!["Widget".into()]);
//! let result = executor.invoke(
//!     |args| check_model_exists(args.get(0).unwrap_or_default()),
//!     &args,
//! )?;
//! ```

mod args;
mod collab;
mod config;
mod context;
mod error;
mod executor;
pub mod inflect;
mod registry;
mod repair;
mod routes;
mod signal;

pub use args::{MultilineArg, StepArgs};
pub use collab::{Browser, Collaborators, Route, Router, Scaffolder, SchemaEngine};
pub use config::RepairConfig;
pub use context::RepairContext;
pub use error::{ExecError, RepairError, Result, StepFailure};
pub use executor::HealingExecutor;
pub use registry::{RepairRegistry, RepairRule};
pub use repair::{
    CreateMissingContent, CreateMissingModel, CreateMissingPageRoute, RepairAction, RepairSet,
};
pub use routes::{RouteInsertion, add_listing_route, insert_listing_route};
pub use signal::{FailureSignal, RepairKind};
