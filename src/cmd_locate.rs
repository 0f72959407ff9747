//! Locate, collect and fields subcommand handlers.

use std::path::Path;

use anyhow::{anyhow, bail, Result};
use serde_json::json;
use tracing::{info, warn};

use joblocator_config::OutputFormat;
use joblocator_core::{AnchorSlot, FieldKind, LocateError, Locator, LocatorEngine, LocatorSet};
use joblocator_dom::{Document, NodeId};

use crate::page::load_page;

/// Resolve one field and print the locator.
pub(crate) fn handle_locate(
    engine: &LocatorEngine,
    page: &Path,
    anchor: Option<&str>,
    field: &str,
    format: OutputFormat,
) -> Result<()> {
    let selectors: Vec<&str> = anchor.into_iter().collect();
    let loaded = load_page(page, &selectors)?;
    let anchor = loaded.anchors.first().copied().flatten();

    let field = FieldKind::from_name(field);
    if field == FieldKind::Generic {
        warn!("Unknown field name, resolving as a generic text field");
    }

    let locator = engine.locate(&loaded.document, anchor, field)?;
    info!("Resolved {}", field);
    println!("{}", render(field, &locator, format));
    Ok(())
}

/// Replay a sequence of picks through a single anchor slot and print the
/// collected locator set.
pub(crate) fn handle_collect(engine: &LocatorEngine, page: &Path, picks: &[String]) -> Result<()> {
    let picks = picks
        .iter()
        .map(|pick| parse_pick(pick))
        .collect::<Result<Vec<_>>>()?;
    let selectors: Vec<&str> = picks.iter().map(|(_, css)| css.as_str()).collect();
    let loaded = load_page(page, &selectors)?;

    let set = collect_locators(engine, &loaded.document, &picks, &loaded.anchors)?;

    let missing = set.missing();
    if !missing.is_empty() {
        info!(
            "Fields left unset: {}",
            missing.iter().map(FieldKind::label).collect::<Vec<_>>().join(", ")
        );
    }
    println!("{}", serde_json::to_string_pretty(&set)?);
    Ok(())
}

/// Resolve each pick against the element its selector matched.
///
/// A selector that matched nothing empties the slot, so that pick is skipped
/// instead of reusing the previous pick's element.
fn collect_locators(
    engine: &LocatorEngine,
    document: &Document,
    picks: &[(FieldKind, String)],
    anchors: &[Option<NodeId>],
) -> Result<LocatorSet> {
    let mut slot = AnchorSlot::new();
    let mut set = LocatorSet::new();

    for ((field, css), anchor) in picks.iter().zip(anchors) {
        match anchor {
            Some(anchor) => {
                slot.set(*anchor);
            }
            None => {
                warn!("Nothing matched {}", css);
                slot.clear();
            }
        }

        let locator = match engine.locate(document, slot.get(), *field) {
            Ok(locator) => locator,
            Err(LocateError::NoAnchor) => {
                warn!("Skipping {}: {}", field, LocateError::NoAnchor);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if !set.record(*field, &locator) {
            warn!("{} is not a collected field, skipping", css);
        }
    }

    Ok(set)
}

/// Print the context-menu fields.
pub(crate) fn handle_fields() -> Result<()> {
    for field in FieldKind::MENU {
        println!("{:<14}{}", field.menu_id(), field.label());
    }
    Ok(())
}

/// Split `FIELD=CSS`.
fn parse_pick(pick: &str) -> Result<(FieldKind, String)> {
    let (name, css) = pick
        .split_once('=')
        .ok_or_else(|| anyhow!("Invalid pick '{}', expected FIELD=CSS", pick))?;
    let css = css.trim();
    if css.is_empty() {
        bail!("Invalid pick '{}', the selector is empty", pick);
    }
    Ok((FieldKind::from_name(name), css.to_string()))
}

fn render(field: FieldKind, locator: &Locator, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => locator.to_string(),
        OutputFormat::Json => json!({
            "field": field,
            "locator": locator,
            "resolved": locator.path().is_some(),
        })
        .to_string(),
    }
}
