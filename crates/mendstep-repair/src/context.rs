//! Explicit state carried between repair actions.

use std::path::{Path, PathBuf};

/// State one repair action leaves behind for a later one.
///
/// A page-route repair records the view template it generated; a content
/// repair writes into that file. The context is owned by a single
/// executor, so when the runner builds one executor per scenario the
/// recorded path cannot leak across scenarios.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairContext {
    last_view_file: Option<PathBuf>,
}

impl RepairContext {
    /// Empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the view template generated by the most recent page repair.
    /// Overwrites any previously recorded path.
    pub fn record_view_file(&mut self, path: impl Into<PathBuf>) {
        self.last_view_file = Some(path.into());
    }

    /// The most recently repaired view template, if any.
    pub fn last_view_file(&self) -> Option<&Path> {
        self.last_view_file.as_deref()
    }

    /// Clear all recorded state.
    pub fn reset(&mut self) {
        self.last_view_file = None;
    }
}
