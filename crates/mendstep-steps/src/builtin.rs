//! Built-in model, navigation, and content steps.
//!
//! These mirror the step vocabulary the executor knows how to repair:
//! asserting a model exists, asserting a page is routable, and asserting
//! text is displayed. Composite steps ("there are no widgets", "I browse
//! the list of widgets") run the same assertions as their parts, so a
//! repaired-and-retried composite step re-checks everything it implies.

use std::sync::Arc;

use regex::Regex;
use tracing::debug;

use mendstep_repair::{StepArgs, StepFailure, inflect};

use crate::error::StepError;
use crate::registry::{StepHandler, StepRegistry};
use crate::world::World;

/// Register every built-in step.
pub fn register(registry: &mut StepRegistry) {
    let steps: [(&str, StepHandler); 8] = [
        (r"there are no (\S+)", Arc::new(no_objects)),
        (r"(?:|there is )a model called (.+?)", Arc::new(a_model)),
        (
            r"(?:|there are )no instances of that model",
            Arc::new(no_instances),
        ),
        (r"I browse the list of (.+?)", Arc::new(browse_list)),
        (r"there is a page listing (.+?)", Arc::new(page_listing)),
        (r"there is a page with URL (.+?)", Arc::new(page_with_url)),
        (r"I navigate to that page", Arc::new(navigate)),
        (r#"I should see the text "([^"]*)""#, Arc::new(see_text)),
    ];
    for (pattern, handler) in steps {
        registry
            .register(pattern, handler)
            .expect("built-in step pattern");
    }
}

fn capture<'a>(args: &'a StepArgs, index: usize) -> Result<&'a str, StepFailure> {
    args.get(index)
        .ok_or_else(|| StepError::Other(format!("step capture {index} missing")).into())
}

/// `there are no <objects>`: the model exists and has no instances.
fn no_objects(world: &mut World, args: &StepArgs) -> Result<(), StepFailure> {
    let objects = capture(args, 0)?;
    let model = inflect::classify(objects);
    assert_model(world, &model)?;
    clear_instances(world)?;
    Ok(())
}

/// `a model called <Name>`
fn a_model(world: &mut World, args: &StepArgs) -> Result<(), StepFailure> {
    let model = capture(args, 0)?.to_string();
    assert_model(world, &model)?;
    Ok(())
}

/// `no instances of that model`
fn no_instances(world: &mut World, _args: &StepArgs) -> Result<(), StepFailure> {
    clear_instances(world)?;
    Ok(())
}

/// `I browse the list of <models>`: the listing page exists, then
/// navigate to it.
fn browse_list(world: &mut World, args: &StepArgs) -> Result<(), StepFailure> {
    let models = capture(args, 0)?;
    let url = format!("/{models}");
    assert_page(world, &url)?;
    visit_last_page(world)?;
    Ok(())
}

/// `there is a page listing <models>`
fn page_listing(world: &mut World, args: &StepArgs) -> Result<(), StepFailure> {
    let models = capture(args, 0)?;
    let url = format!("/{models}");
    assert_page(world, &url)?;
    Ok(())
}

/// `there is a page with URL <url>`
fn page_with_url(world: &mut World, args: &StepArgs) -> Result<(), StepFailure> {
    let url = capture(args, 0)?.to_string();
    assert_page(world, &url)?;
    Ok(())
}

/// `I navigate to that page`
fn navigate(world: &mut World, _args: &StepArgs) -> Result<(), StepFailure> {
    visit_last_page(world)?;
    Ok(())
}

/// `I should see the text "<text>"`
fn see_text(world: &mut World, args: &StepArgs) -> Result<(), StepFailure> {
    let text = capture(args, 0)?.to_string();
    assert_text(world, &text)?;
    Ok(())
}

fn assert_model(world: &mut World, model: &str) -> Result<(), StepError> {
    let table = inflect::tableize(model);
    let exists = world
        .schema()
        .table_exists(&table)
        .map_err(|e| StepError::Other(e.to_string()))?;
    if !exists {
        return Err(StepError::ModelNotFound(model.to_string()));
    }
    let entity = world
        .schema()
        .lookup_entity(model)
        .map_err(|e| StepError::Other(e.to_string()))?
        .unwrap_or_else(|| model.to_string());
    debug!(model = %entity, "model in scope");
    world.set_last_model(entity);
    Ok(())
}

fn clear_instances(world: &mut World) -> Result<(), StepError> {
    let model = world
        .last_model()
        .ok_or_else(|| {
            StepError::Other("no model in scope; name a model first".to_string())
        })?
        .to_string();
    world
        .schema()
        .delete_all(&model)
        .map_err(|e| StepError::Other(e.to_string()))
}

fn assert_page(world: &mut World, url: &str) -> Result<(), StepError> {
    let routes = world
        .router()
        .current_routes()
        .map_err(|e| StepError::Other(e.to_string()))?;
    // A route whose pattern does not compile simply does not match.
    let routed = routes.iter().any(|route| {
        Regex::new(&route.pattern).is_ok_and(|re| re.is_match(url))
    });
    if !routed {
        return Err(StepError::RouteNotFound(url.to_string()));
    }
    debug!(url, "page in scope");
    world.set_last_url(url);
    Ok(())
}

fn visit_last_page(world: &mut World) -> Result<(), StepError> {
    let url = world
        .last_url()
        .ok_or_else(|| {
            StepError::Other("no page in scope; name a page first".to_string())
        })?
        .to_string();
    world
        .browser()
        .visit(&url)
        .map_err(|e| StepError::Other(e.to_string()))
}

fn assert_text(world: &mut World, text: &str) -> Result<(), StepError> {
    let shown = world
        .browser()
        .page_contains(text)
        .map_err(|e| StepError::Other(e.to_string()))?;
    if !shown {
        return Err(StepError::ContentNotFound(text.to_string()));
    }
    Ok(())
}
