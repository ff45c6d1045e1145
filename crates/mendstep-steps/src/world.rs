//! Scenario state shared by the built-in steps.

use mendstep_repair::{Browser, Collaborators, Router, SchemaEngine};

/// Mutable state for one scenario: collaborator handles plus the
/// most-recent model and URL that later steps refer back to ("no
/// instances of that model", "I navigate to that page").
pub struct World {
    collaborators: Collaborators,
    last_model: Option<String>,
    last_url: Option<String>,
}

impl World {
    /// World over the given collaborators, with no scenario state yet.
    pub fn new(collaborators: Collaborators) -> Self {
        Self {
            collaborators,
            last_model: None,
            last_url: None,
        }
    }

    /// The persistence/schema engine.
    pub fn schema(&self) -> &dyn SchemaEngine {
        &*self.collaborators.schema
    }

    /// The routing engine.
    pub fn router(&self) -> &dyn Router {
        &*self.collaborators.router
    }

    /// The browsing driver.
    pub fn browser(&self) -> &dyn Browser {
        &*self.collaborators.browser
    }

    /// The model the scenario most recently referred to.
    pub fn last_model(&self) -> Option<&str> {
        self.last_model.as_deref()
    }

    /// Record the model the scenario is talking about.
    pub fn set_last_model(&mut self, model: impl Into<String>) {
        self.last_model = Some(model.into());
    }

    /// The URL the scenario most recently referred to.
    pub fn last_url(&self) -> Option<&str> {
        self.last_url.as_deref()
    }

    /// Record the URL the scenario is talking about.
    pub fn set_last_url(&mut self, url: impl Into<String>) {
        self.last_url = Some(url.into());
    }

    /// Clear per-scenario state. Collaborator handles are kept.
    pub fn reset(&mut self) {
        self.last_model = None;
        self.last_url = None;
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("last_model", &self.last_model)
            .field("last_url", &self.last_url)
            .finish_non_exhaustive()
    }
}
