//! Error types for step execution and artifact repair.

use std::path::PathBuf;

/// Failure raised by a step body.
///
/// Carries the human-readable message the classifier inspects. The message
/// is preserved verbatim through classification and retry, so the caller
/// always sees the original failure text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct StepFailure {
    message: String,
}

impl StepFailure {
    /// Create a failure from its message text.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message, as raised by the step.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised while applying a repair action.
///
/// All of these are fatal for the current step: the retry is never
/// attempted once a repair has failed.
#[derive(Debug, thiserror::Error)]
pub enum RepairError {
    /// The scaffolding generator failed to produce an artifact.
    #[error("Scaffolding failed: {0}")]
    Scaffold(String),

    /// The persistence engine failed to apply schema changes.
    #[error("Schema migration failed: {0}")]
    Migration(String),

    /// The routing engine failed to answer or reload.
    #[error("Routing engine error: {0}")]
    Routing(String),

    /// The browsing driver failed.
    #[error("Browser error: {0}")]
    Browser(String),

    /// The routing configuration has no anchor line for the slug.
    #[error("No route anchor `get \"{slug}/index\"` found in {}", file.display())]
    RouteAnchorMissing {
        /// The slug whose listing route was being inserted.
        slug: String,
        /// The routing configuration file.
        file: PathBuf,
    },

    /// The routing configuration contains the anchor line more than once.
    #[error("Route anchor `get \"{slug}/index\"` appears {count} times in {}", file.display())]
    RouteAnchorAmbiguous {
        /// The slug whose listing route was being inserted.
        slug: String,
        /// The routing configuration file.
        file: PathBuf,
        /// How many times the anchor line occurs.
        count: usize,
    },

    /// Content repair was requested before any page repair recorded a view
    /// file to write into.
    #[error("No repaired view file to write content into")]
    NoRepairedView,

    /// Content repair needs to re-visit the current page, but the browser
    /// has not navigated anywhere yet.
    #[error("Browser has no current URL to revisit")]
    NoCurrentUrl,

    /// Filesystem error while rewriting a configuration or template file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for collaborator calls and repair actions.
pub type Result<T> = std::result::Result<T, RepairError>;

/// Error surfaced by the healing executor.
///
/// Distinguishes "the step failed" from "a repair failed" while preserving
/// the underlying message text in both cases.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The step failed: either no rule matched its failure, or the single
    /// retry failed again.
    #[error(transparent)]
    Step(#[from] StepFailure),

    /// A repair action failed; the retry was never attempted.
    #[error(transparent)]
    Repair(#[from] RepairError),
}

impl ExecError {
    /// The step failure, if this error wraps one.
    pub fn as_step(&self) -> Option<&StepFailure> {
        match self {
            Self::Step(failure) => Some(failure),
            Self::Repair(_) => None,
        }
    }
}
