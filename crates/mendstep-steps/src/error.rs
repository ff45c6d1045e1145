//! Step-level failures with canonical message text.

use mendstep_repair::StepFailure;

/// Failure raised by a built-in step.
///
/// The `Display` text of the three artifact variants is exactly what the
/// repair registry's built-in rules match, so a failed built-in step is
/// classified without any lossy round-trip through free-form text. The
/// producers we control emit typed signals; foreign steps still go
/// through text classification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    /// The named model has no table yet.
    #[error("No model found called {0}.")]
    ModelNotFound(String),

    /// No registered route pattern matches the URL (given with its
    /// leading slash).
    #[error("No URL pattern found matching {0}.")]
    RouteNotFound(String),

    /// The current page does not display the expected text.
    #[error("The text \"{0}\" was not found in the current page")]
    ContentNotFound(String),

    /// Any other failure; classifies as generic and is never repaired.
    #[error("{0}")]
    Other(String),
}

impl From<StepError> for StepFailure {
    fn from(err: StepError) -> Self {
        StepFailure::new(err.to_string())
    }
}
