//! Configuration for the built-in repair actions.

use std::path::PathBuf;

/// Filesystem locations the repair actions operate on.
///
/// # Example
///
/// ```rust,ignore
/// use mendstep_repair::RepairConfig;
///
/// let config = RepairConfig::default()
///     .with_routes_file("config/routes.rb")
///     .with_migrations_dir("db/migrate");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairConfig {
    /// Routing configuration file rewritten by page-route repairs.
    pub routes_file: PathBuf,
    /// Directory holding pending schema changes.
    pub migrations_dir: PathBuf,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            routes_file: PathBuf::from("config/routes.rb"),
            migrations_dir: PathBuf::from("db/migrate"),
        }
    }
}

impl RepairConfig {
    /// Set the routing configuration file.
    pub fn with_routes_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.routes_file = path.into();
        self
    }

    /// Set the pending schema changes directory.
    pub fn with_migrations_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.migrations_dir = path.into();
        self
    }
}
