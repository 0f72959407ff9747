use joblocator_config::HeuristicsConfig;
use joblocator_dom::DomTree;
use tracing::debug;

use super::Target;
use crate::error::LocateError;
use crate::locator::NoSourceReason;
use crate::predicates::{closest_bounded, find_below_body, is_header_zone};

/// Tiered image search, first tier to match wins:
///
/// 1. the anchor is an `<img>`;
/// 2. the anchor sits in an `<svg>` below the body: no source;
/// 3. the nearest header zone's first `<img>`, when it has one;
/// 4. the nearest `<img>` ancestor, else the first `<img>` under the
///    anchor's parent;
/// 5. no image.
pub(crate) fn resolve_logo<T: DomTree>(
    tree: &T,
    anchor: T::NodeId,
    heuristics: &HeuristicsConfig,
) -> Result<Target<T::NodeId>, LocateError> {
    let max_depth = heuristics.max_depth;

    if tree.is_tag(anchor, "img") {
        debug!("Logo anchor is an <img>");
        return Ok(Target::Node(anchor));
    }

    if find_below_body(tree, anchor, max_depth, |n| tree.is_tag(n, "svg"))?.is_some() {
        debug!("Logo anchor is inside an <svg>");
        return Ok(Target::NoSource(NoSourceReason::VectorGraphic));
    }

    let zone = closest_bounded(tree, anchor, max_depth, |n| {
        is_header_zone(tree, n, &heuristics.logo)
    })?;
    if let Some(zone) = zone {
        if let Some(img) = first_image(tree, zone) {
            debug!("Logo found in header zone <{}>", tree.tag(zone));
            return Ok(Target::Node(img));
        }
        debug!("Header zone <{}> has no image, trying nearby images", tree.tag(zone));
    }

    if let Some(img) = closest_bounded(tree, anchor, max_depth, |n| tree.is_tag(n, "img"))? {
        return Ok(Target::Node(img));
    }
    if let Some(img) = tree.parent(anchor).and_then(|parent| first_image(tree, parent)) {
        debug!("Logo found next to the anchor");
        return Ok(Target::Node(img));
    }

    debug!("No image near {:?}", anchor);
    Ok(Target::NoSource(NoSourceReason::NoImage))
}

fn first_image<T: DomTree>(tree: &T, node: T::NodeId) -> Option<T::NodeId> {
    tree.descendants(node).find(|&d| tree.is_tag(d, "img"))
}
