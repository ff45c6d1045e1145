//! In-memory collaborator fakes shared by the unit tests.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use mendstep_repair::{
    Browser, Collaborators, Result, Route, Router, Scaffolder, SchemaEngine,
};

#[derive(Default)]
struct Inner {
    tables: Mutex<Vec<String>>,
    routes: Mutex<Vec<Route>>,
    page: Mutex<String>,
    visited: Mutex<Vec<String>>,
    deleted: Mutex<Vec<String>>,
    current_url: Mutex<Option<String>>,
}

/// One shared fake standing in for all four collaborators.
#[derive(Clone, Default)]
pub(crate) struct FakeCollaborators {
    inner: Arc<Inner>,
}

impl FakeCollaborators {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn collaborators(&self) -> Collaborators {
        Collaborators {
            scaffolder: Arc::new(self.clone()),
            schema: Arc::new(self.clone()),
            router: Arc::new(self.clone()),
            browser: Arc::new(self.clone()),
        }
    }

    pub(crate) fn add_table(&self, table: &str) {
        self.inner.tables.lock().unwrap().push(table.to_string());
    }

    pub(crate) fn add_route(&self, pattern: &str) {
        self.inner.routes.lock().unwrap().push(Route::new(pattern));
    }

    pub(crate) fn set_page(&self, content: &str) {
        *self.inner.page.lock().unwrap() = content.to_string();
    }

    pub(crate) fn visited(&self) -> Vec<String> {
        self.inner.visited.lock().unwrap().clone()
    }

    pub(crate) fn deleted(&self) -> Vec<String> {
        self.inner.deleted.lock().unwrap().clone()
    }
}

impl Scaffolder for FakeCollaborators {
    fn generate_entity(&self, _name: &str) -> Result<()> {
        Ok(())
    }

    fn generate_listing_handler(&self, _plural: &str, _action: &str) -> Result<PathBuf> {
        Ok(PathBuf::from("index.html.erb"))
    }
}

impl SchemaEngine for FakeCollaborators {
    fn apply_pending_migrations(&self, _dir: &Path) -> Result<()> {
        Ok(())
    }

    fn table_exists(&self, table: &str) -> Result<bool> {
        Ok(self.inner.tables.lock().unwrap().iter().any(|t| t == table))
    }

    fn lookup_entity(&self, name: &str) -> Result<Option<String>> {
        Ok(Some(name.to_string()))
    }

    fn delete_all(&self, name: &str) -> Result<()> {
        self.inner.deleted.lock().unwrap().push(name.to_string());
        Ok(())
    }
}

impl Router for FakeCollaborators {
    fn current_routes(&self) -> Result<Vec<Route>> {
        Ok(self.inner.routes.lock().unwrap().clone())
    }

    fn reload_routes(&self) -> Result<()> {
        Ok(())
    }
}

impl Browser for FakeCollaborators {
    fn visit(&self, url: &str) -> Result<()> {
        self.inner.visited.lock().unwrap().push(url.to_string());
        *self.inner.current_url.lock().unwrap() = Some(url.to_string());
        Ok(())
    }

    fn page_contains(&self, text: &str) -> Result<bool> {
        Ok(self.inner.page.lock().unwrap().contains(text))
    }

    fn current_url(&self) -> Option<String> {
        self.inner.current_url.lock().unwrap().clone()
    }
}

/// Collaborators with nothing defined: no tables, no routes, empty page.
pub(crate) fn noop_collaborators() -> Collaborators {
    FakeCollaborators::new().collaborators()
}
