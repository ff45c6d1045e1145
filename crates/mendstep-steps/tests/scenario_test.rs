//! End-to-end scenario runs over an in-memory fake application.
//!
//! The fake keeps a schema, a route table parsed from a real routes file
//! on disk, and a "browser" that renders a view template, so the three
//! canonical repairs (model, page route, content) can be exercised from
//! scenario text down to the rewritten files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use regex::Regex;

use mendstep_repair::{
    Browser, Collaborators, RepairConfig, RepairError, Result, Route, Router, Scaffolder,
    SchemaEngine, inflect,
};
use mendstep_steps::{RunnerError, ScenarioRunner};

#[derive(Default)]
struct AppState {
    pending_entities: Vec<String>,
    tables: Vec<String>,
    routes: Vec<Route>,
    page: String,
    current_url: Option<String>,
    visited: Vec<String>,
    deleted: Vec<String>,
}

/// One fake standing in for all four collaborators, sharing state.
#[derive(Clone)]
struct FakeApp {
    root: PathBuf,
    state: Arc<Mutex<AppState>>,
}

impl FakeApp {
    fn new(root: &Path) -> Self {
        let app = Self {
            root: root.to_path_buf(),
            state: Arc::new(Mutex::new(AppState::default())),
        };
        fs::write(app.routes_file(), "Routes.draw do\nend\n").unwrap();
        app
    }

    fn routes_file(&self) -> PathBuf {
        self.root.join("routes.rb")
    }

    fn view_file(&self, slug: &str) -> PathBuf {
        self.root
            .join("app/views")
            .join(slug)
            .join("index.html.erb")
    }

    fn collaborators(&self) -> Collaborators {
        Collaborators {
            scaffolder: Arc::new(self.clone()),
            schema: Arc::new(self.clone()),
            router: Arc::new(self.clone()),
            browser: Arc::new(self.clone()),
        }
    }

    fn config(&self) -> RepairConfig {
        RepairConfig::default()
            .with_routes_file(self.routes_file())
            .with_migrations_dir(self.root.join("db/migrate"))
    }

    fn tables(&self) -> Vec<String> {
        self.state.lock().unwrap().tables.clone()
    }

    fn visited(&self) -> Vec<String> {
        self.state.lock().unwrap().visited.clone()
    }

    fn deleted(&self) -> Vec<String> {
        self.state.lock().unwrap().deleted.clone()
    }
}

impl Scaffolder for FakeApp {
    fn generate_entity(&self, name: &str) -> Result<()> {
        self.state
            .lock()
            .unwrap()
            .pending_entities
            .push(name.to_string());
        Ok(())
    }

    fn generate_listing_handler(&self, plural: &str, action: &str) -> Result<PathBuf> {
        let slug = inflect::underscore(plural);
        let view = self
            .root
            .join("app/views")
            .join(&slug)
            .join(format!("{action}.html.erb"));
        if let Some(parent) = view.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&view, "")?;

        // The generator registers the handler's own default route; that
        // line is the anchor the repair inserts after.
        let source = fs::read_to_string(self.routes_file())?;
        let mut lines: Vec<&str> = source.lines().collect();
        let anchor = format!("  get \"{slug}/{action}\"");
        let end = lines
            .iter()
            .rposition(|line| line.trim() == "end")
            .unwrap_or(lines.len());
        lines.insert(end, &anchor);
        fs::write(self.routes_file(), lines.join("\n") + "\n")?;
        Ok(view)
    }
}

impl SchemaEngine for FakeApp {
    fn apply_pending_migrations(&self, _dir: &Path) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let pending: Vec<String> = state.pending_entities.drain(..).collect();
        for entity in pending {
            state.tables.push(inflect::tableize(&entity));
        }
        Ok(())
    }

    fn table_exists(&self, table: &str) -> Result<bool> {
        Ok(self.state.lock().unwrap().tables.iter().any(|t| t == table))
    }

    fn lookup_entity(&self, name: &str) -> Result<Option<String>> {
        Ok(Some(name.to_string()))
    }

    fn delete_all(&self, name: &str) -> Result<()> {
        self.state.lock().unwrap().deleted.push(name.to_string());
        Ok(())
    }
}

impl Router for FakeApp {
    fn current_routes(&self) -> Result<Vec<Route>> {
        Ok(self.state.lock().unwrap().routes.clone())
    }

    fn reload_routes(&self) -> Result<()> {
        let source = fs::read_to_string(self.routes_file())?;
        let line_re = Regex::new(r#"(?:get|match) "(/?[^"]+)""#).unwrap();
        let routes = source
            .lines()
            .filter_map(|line| line_re.captures(line.trim()))
            .map(|caps| {
                let path = caps[1].trim_start_matches('/').to_string();
                Route::new(format!("^/{path}$"))
            })
            .collect();
        self.state.lock().unwrap().routes = routes;
        Ok(())
    }
}

impl Browser for FakeApp {
    fn visit(&self, url: &str) -> Result<()> {
        let slug = url.trim_matches('/').to_string();
        let page = fs::read_to_string(self.view_file(&slug)).unwrap_or_default();
        let mut state = self.state.lock().unwrap();
        state.visited.push(url.to_string());
        state.current_url = Some(url.to_string());
        state.page = page;
        Ok(())
    }

    fn page_contains(&self, text: &str) -> Result<bool> {
        Ok(self.state.lock().unwrap().page.contains(text))
    }

    fn current_url(&self) -> Option<String> {
        self.state.lock().unwrap().current_url.clone()
    }
}

/// A router that cannot be reached at all.
struct UnreachableRouter;

impl Router for UnreachableRouter {
    fn current_routes(&self) -> Result<Vec<Route>> {
        Err(RepairError::Routing("connection refused".into()))
    }

    fn reload_routes(&self) -> Result<()> {
        Err(RepairError::Routing("connection refused".into()))
    }
}

#[test]
fn a_failing_scenario_is_healed_step_by_step() {
    let dir = tempfile::tempdir().unwrap();
    let app = FakeApp::new(dir.path());
    let mut runner = ScenarioRunner::new(app.collaborators(), &app.config());

    runner
        .run_scenario(
            "browse widgets",
            &[
                "Given there are no widgets",
                "When I browse the list of widgets",
                r#"Then I should see the text "Hello world""#,
            ],
        )
        .unwrap();

    // Model repair: the Widget table was migrated in, then emptied.
    assert_eq!(app.tables(), vec!["widgets"]);
    assert_eq!(app.deleted(), vec!["Widget"]);

    // Page repair: the routes file gained the anchor and the listing route.
    let routes = fs::read_to_string(app.routes_file()).unwrap();
    assert!(routes.contains("  get \"widgets/index\"\n  match \"/widgets\" => \"widgets#index\"\n"));

    // Content repair: the view holds the text and the page was re-visited.
    assert_eq!(
        fs::read_to_string(app.view_file("widgets")).unwrap(),
        "Hello world\n"
    );
    assert_eq!(app.visited(), vec!["/widgets", "/widgets"]);
}

#[test]
fn an_already_healthy_scenario_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let app = FakeApp::new(dir.path());

    // Pre-provision everything the scenario needs.
    let mut runner = ScenarioRunner::new(app.collaborators(), &app.config());
    runner
        .run_scenario(
            "heal once",
            &[
                "Given there are no widgets",
                "When I browse the list of widgets",
                r#"Then I should see the text "Hello world""#,
            ],
        )
        .unwrap();
    let routes_before = fs::read_to_string(app.routes_file()).unwrap();

    // The same scenario again: every step passes first try, and the
    // routing configuration is untouched (no duplicate insertion).
    let mut runner = ScenarioRunner::new(app.collaborators(), &app.config());
    runner
        .run_scenario(
            "already healthy",
            &[
                "Given there are no widgets",
                "When I browse the list of widgets",
                r#"Then I should see the text "Hello world""#,
            ],
        )
        .unwrap();
    assert_eq!(fs::read_to_string(app.routes_file()).unwrap(), routes_before);
}

#[test]
fn unrelated_collaborator_failures_are_not_repaired() {
    let dir = tempfile::tempdir().unwrap();
    let app = FakeApp::new(dir.path());
    let collaborators = Collaborators {
        router: Arc::new(UnreachableRouter),
        ..app.collaborators()
    };
    let mut runner = ScenarioRunner::new(collaborators, &app.config());

    let err = runner
        .run_step("Given there is a page with URL /widgets")
        .unwrap_err();
    assert!(err.to_string().contains("connection refused"));

    // No repair side effects: the routes file is untouched.
    assert_eq!(
        fs::read_to_string(app.routes_file()).unwrap(),
        "Routes.draw do\nend\n"
    );
}

#[test]
fn scenario_state_does_not_leak_between_scenarios() {
    let dir = tempfile::tempdir().unwrap();
    let app = FakeApp::new(dir.path());
    let mut runner = ScenarioRunner::new(app.collaborators(), &app.config());

    runner
        .run_scenario(
            "first",
            &["Given there are no widgets", "When I browse the list of widgets"],
        )
        .unwrap();

    // "that page" refers to nothing once the next scenario starts.
    let err = runner
        .run_scenario("second", &["When I navigate to that page"])
        .unwrap_err();
    assert!(matches!(err, RunnerError::Exec(_)));
    assert!(err.to_string().contains("no page in scope"));
}

#[test]
fn undefined_steps_are_reported_by_text() {
    let dir = tempfile::tempdir().unwrap();
    let app = FakeApp::new(dir.path());
    let mut runner = ScenarioRunner::new(app.collaborators(), &app.config());

    let err = runner
        .run_scenario("typo", &["Given there are sum widgets"])
        .unwrap_err();
    assert!(matches!(
        err,
        RunnerError::Undefined(ref text) if text == "there are sum widgets"
    ));
}
