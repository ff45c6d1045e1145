//! Textual rewriting of the routing configuration.
//!
//! A page-route repair must make `/<slug>` dispatch to the generated
//! listing handler. The insertion is anchored on the line the scaffolder
//! generates for the handler's own `index` route, and the new route line
//! is appended directly after it. The file is rewritten wholesale: read
//! entirely, transformed, written back.
//!
//! Re-inserting the same route is a no-op, and an absent or duplicated
//! anchor is rejected with a typed error instead of corrupting the file.

use std::fs;
use std::path::Path;

use crate::error::{RepairError, Result};

/// Outcome of a route insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteInsertion {
    /// The route line was inserted after the anchor.
    Inserted,
    /// The route line is already present; nothing was changed.
    AlreadyPresent,
}

/// The anchor line introducing the handler's own `index` route.
fn anchor_line(slug: &str) -> String {
    format!("get \"{slug}/index\"")
}

/// The top-level route line mapping `/<slug>` to the listing action.
fn listing_route_line(slug: &str) -> String {
    format!("match \"/{slug}\" => \"{slug}#index\"")
}

/// Insert the listing route for `slug` into `source`.
///
/// Returns the rewritten source, or `None` when the route is already
/// present. `file` is only used to name the configuration in errors.
pub fn insert_listing_route(source: &str, slug: &str, file: &Path) -> Result<Option<String>> {
    let anchor = anchor_line(slug);
    let route = listing_route_line(slug);

    if source.lines().any(|line| line.trim() == route) {
        return Ok(None);
    }

    match source.lines().filter(|line| line.trim() == anchor).count() {
        0 => {
            return Err(RepairError::RouteAnchorMissing {
                slug: slug.to_string(),
                file: file.to_path_buf(),
            });
        }
        1 => {}
        count => {
            return Err(RepairError::RouteAnchorAmbiguous {
                slug: slug.to_string(),
                file: file.to_path_buf(),
                count,
            });
        }
    }

    let mut rewritten = String::with_capacity(source.len() + route.len() + 8);
    for line in source.lines() {
        rewritten.push_str(line);
        rewritten.push('\n');
        if line.trim() == anchor {
            // Keep the anchor's indentation for the inserted line.
            let indent = &line[..line.len() - line.trim_start().len()];
            rewritten.push_str(indent);
            rewritten.push_str(&route);
            rewritten.push('\n');
        }
    }
    Ok(Some(rewritten))
}

/// Rewrite the routing configuration at `file`, adding the listing route
/// for `slug`.
pub fn add_listing_route(file: &Path, slug: &str) -> Result<RouteInsertion> {
    let source = fs::read_to_string(file)?;
    match insert_listing_route(&source, slug, file)? {
        Some(rewritten) => {
            fs::write(file, rewritten)?;
            Ok(RouteInsertion::Inserted)
        }
        None => Ok(RouteInsertion::AlreadyPresent),
    }
}
