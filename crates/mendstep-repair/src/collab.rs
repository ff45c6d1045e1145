//! Narrow contracts for the external collaborators.
//!
//! The core only ever talks to the scaffolding generator, the
//! persistence/schema engine, the routing engine, and the browsing driver
//! through these traits. All calls are synchronous and blocking; the core
//! enforces no timeouts of its own.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Result;

/// A registered route as seen by the routing engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Path pattern, tested as a regular expression against a URL.
    pub pattern: String,
}

impl Route {
    /// Create a route from its path pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

/// Generates boilerplate source artifacts from a name.
pub trait Scaffolder: Send + Sync {
    /// Generate a persisted-entity definition plus a pending schema change
    /// for `name`.
    fn generate_entity(&self, name: &str) -> Result<()>;

    /// Generate a listing-style display handler named `plural` with the
    /// given action, returning the path of the generated view template.
    ///
    /// The generator is also expected to register the handler's own default
    /// route (`get "<slug>/index"`) in the routing configuration; that line
    /// anchors the top-level route insertion performed afterwards.
    fn generate_listing_handler(&self, plural: &str, action: &str) -> Result<PathBuf>;
}

/// Applies schema changes and answers schema questions.
pub trait SchemaEngine: Send + Sync {
    /// Apply every pending schema change under `dir`.
    fn apply_pending_migrations(&self, dir: &Path) -> Result<()>;

    /// Whether a table with this name exists.
    fn table_exists(&self, table: &str) -> Result<bool>;

    /// Resolve a model name to its canonical entity handle, if defined.
    fn lookup_entity(&self, name: &str) -> Result<Option<String>>;

    /// Delete every instance of the named entity.
    fn delete_all(&self, name: &str) -> Result<()>;
}

/// Route table access and reload.
pub trait Router: Send + Sync {
    /// The currently registered routes.
    fn current_routes(&self) -> Result<Vec<Route>>;

    /// Reload the route table from the (possibly rewritten) configuration.
    fn reload_routes(&self) -> Result<()>;
}

/// Drives the page under test.
pub trait Browser: Send + Sync {
    /// Navigate to `url`.
    fn visit(&self, url: &str) -> Result<()>;

    /// Whether the current page displays `text`.
    fn page_contains(&self, text: &str) -> Result<bool>;

    /// URL of the page currently displayed, if any navigation happened.
    fn current_url(&self) -> Option<String>;
}

/// Handles to all four collaborators, cloned freely between the repair
/// actions and the step layer.
#[derive(Clone)]
pub struct Collaborators {
    /// Scaffolding generator.
    pub scaffolder: Arc<dyn Scaffolder>,
    /// Persistence/schema engine.
    pub schema: Arc<dyn SchemaEngine>,
    /// Routing engine.
    pub router: Arc<dyn Router>,
    /// Browsing driver.
    pub browser: Arc<dyn Browser>,
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}
