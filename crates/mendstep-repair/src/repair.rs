//! Repair actions: synthesize the missing artifact named by a failure.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::collab::{Browser, Collaborators, Router, Scaffolder, SchemaEngine};
use crate::config::RepairConfig;
use crate::context::RepairContext;
use crate::error::{RepairError, Result};
use crate::inflect;
use crate::routes::{self, RouteInsertion};
use crate::signal::RepairKind;

/// A one-shot, side-effecting operation that synthesizes a missing
/// artifact so a previously failing step can succeed on retry.
///
/// An action either completes, enabling the retry, or fails fatally.
/// There is no partial-success or rollback: a failure after a filesystem
/// write leaves the write in place.
pub trait RepairAction: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Apply the repair for the capture extracted from the failure message.
    fn apply(&self, capture: &str, ctx: &mut RepairContext) -> Result<()>;
}

/// Generates the missing entity definition and applies the pending schema
/// changes.
pub struct CreateMissingModel {
    scaffolder: Arc<dyn Scaffolder>,
    schema: Arc<dyn SchemaEngine>,
    migrations_dir: PathBuf,
}

impl CreateMissingModel {
    /// Build the action against the given collaborators.
    pub fn new(
        scaffolder: Arc<dyn Scaffolder>,
        schema: Arc<dyn SchemaEngine>,
        migrations_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            scaffolder,
            schema,
            migrations_dir: migrations_dir.into(),
        }
    }
}

impl RepairAction for CreateMissingModel {
    fn name(&self) -> &'static str {
        "create_missing_model"
    }

    fn apply(&self, capture: &str, _ctx: &mut RepairContext) -> Result<()> {
        debug!(model = capture, "generating missing model");
        self.scaffolder.generate_entity(capture)?;
        self.schema.apply_pending_migrations(&self.migrations_dir)?;
        Ok(())
    }
}

/// Generates a listing handler for the slug, routes `/<slug>` to it, and
/// reloads the route table.
pub struct CreateMissingPageRoute {
    scaffolder: Arc<dyn Scaffolder>,
    router: Arc<dyn Router>,
    routes_file: PathBuf,
}

impl CreateMissingPageRoute {
    /// Build the action against the given collaborators.
    pub fn new(
        scaffolder: Arc<dyn Scaffolder>,
        router: Arc<dyn Router>,
        routes_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            scaffolder,
            router,
            routes_file: routes_file.into(),
        }
    }
}

impl RepairAction for CreateMissingPageRoute {
    fn name(&self) -> &'static str {
        "create_missing_page_route"
    }

    fn apply(&self, capture: &str, ctx: &mut RepairContext) -> Result<()> {
        let handler = inflect::pluralize(&inflect::classify(capture));
        debug!(slug = capture, handler = %handler, "generating missing page listing");
        let view_file = self
            .scaffolder
            .generate_listing_handler(&handler, "index")?;
        ctx.record_view_file(view_file);

        match routes::add_listing_route(&self.routes_file, capture)? {
            RouteInsertion::Inserted => {
                debug!(slug = capture, "inserted listing route");
            }
            RouteInsertion::AlreadyPresent => {
                debug!(slug = capture, "listing route already present");
            }
        }
        self.router.reload_routes()?;
        Ok(())
    }
}

/// Writes the missing text into the last repaired view template and
/// refreshes the page.
pub struct CreateMissingContent {
    browser: Arc<dyn Browser>,
}

impl CreateMissingContent {
    /// Build the action against the given collaborator.
    pub fn new(browser: Arc<dyn Browser>) -> Self {
        Self { browser }
    }
}

impl RepairAction for CreateMissingContent {
    fn name(&self) -> &'static str {
        "create_missing_content"
    }

    fn apply(&self, capture: &str, ctx: &mut RepairContext) -> Result<()> {
        let view_file = ctx.last_view_file().ok_or(RepairError::NoRepairedView)?;
        debug!(text = capture, view = %view_file.display(), "writing missing content");
        fs::write(view_file, format!("{capture}\n"))?;

        let url = self.browser.current_url().ok_or(RepairError::NoCurrentUrl)?;
        self.browser.visit(&url)?;
        Ok(())
    }
}

/// The repair actions available to an executor, keyed by failure kind.
#[derive(Clone, Default)]
pub struct RepairSet {
    actions: HashMap<RepairKind, Arc<dyn RepairAction>>,
}

impl RepairSet {
    /// A set with no actions.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The three built-in actions, wired to the given collaborators.
    pub fn builtin(collaborators: &Collaborators, config: &RepairConfig) -> Self {
        let mut set = Self::empty();
        set.register(
            RepairKind::MissingModel,
            Arc::new(CreateMissingModel::new(
                Arc::clone(&collaborators.scaffolder),
                Arc::clone(&collaborators.schema),
                config.migrations_dir.clone(),
            )),
        );
        set.register(
            RepairKind::MissingRoute,
            Arc::new(CreateMissingPageRoute::new(
                Arc::clone(&collaborators.scaffolder),
                Arc::clone(&collaborators.router),
                config.routes_file.clone(),
            )),
        );
        set.register(
            RepairKind::MissingContent,
            Arc::new(CreateMissingContent::new(Arc::clone(
                &collaborators.browser,
            ))),
        );
        set
    }

    /// Register an action for a failure kind, replacing any existing one.
    pub fn register(&mut self, kind: RepairKind, action: Arc<dyn RepairAction>) {
        self.actions.insert(kind, action);
    }

    /// The action for a failure kind, if registered.
    pub fn get(&self, kind: RepairKind) -> Option<Arc<dyn RepairAction>> {
        self.actions.get(&kind).cloned()
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether no actions are registered.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl std::fmt::Debug for RepairSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.actions.values().map(|a| a.name()).collect();
        f.debug_struct("RepairSet").field("actions", &names).finish()
    }
}
