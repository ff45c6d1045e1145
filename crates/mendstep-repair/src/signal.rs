//! Failure classification results.

/// Category of repairable failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepairKind {
    /// A persisted-entity definition is missing.
    MissingModel,
    /// No route dispatches the requested URL.
    MissingRoute,
    /// The current page does not display the expected text.
    MissingContent,
}

impl RepairKind {
    /// Build the signal for this kind with the extracted capture.
    pub fn signal(self, capture: &str) -> FailureSignal {
        match self {
            Self::MissingModel => FailureSignal::MissingModel {
                name: capture.to_string(),
            },
            Self::MissingRoute => FailureSignal::MissingRoute {
                slug: capture.to_string(),
            },
            Self::MissingContent => FailureSignal::MissingContent {
                text: capture.to_string(),
            },
        }
    }
}

/// Outcome of classifying a failure message.
///
/// The three specific variants carry the single capture extracted from the
/// message: the missing name. `Generic` means no rule matched and the
/// original failure must be re-raised unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureSignal {
    /// `No model found called <name>.`
    MissingModel {
        /// The missing model name.
        name: String,
    },
    /// `No URL pattern found matching /<slug>.`
    MissingRoute {
        /// The unrouted path, without the leading slash.
        slug: String,
    },
    /// `The text "<text>" was not found in the current page`
    MissingContent {
        /// The text the page should have displayed.
        text: String,
    },
    /// No rule matched.
    Generic,
}

impl FailureSignal {
    /// The repair kind, if the failure is repairable.
    pub fn kind(&self) -> Option<RepairKind> {
        match self {
            Self::MissingModel { .. } => Some(RepairKind::MissingModel),
            Self::MissingRoute { .. } => Some(RepairKind::MissingRoute),
            Self::MissingContent { .. } => Some(RepairKind::MissingContent),
            Self::Generic => None,
        }
    }

    /// The extracted capture, if the failure is repairable.
    pub fn capture(&self) -> Option<&str> {
        match self {
            Self::MissingModel { name } => Some(name),
            Self::MissingRoute { slug } => Some(slug),
            Self::MissingContent { text } => Some(text),
            Self::Generic => None,
        }
    }
}
