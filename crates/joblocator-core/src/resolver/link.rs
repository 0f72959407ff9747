use joblocator_config::HeuristicsConfig;
use joblocator_dom::DomTree;
use tracing::debug;

use crate::error::LocateError;
use crate::predicates::{find_below_body, has_meaningful_content, is_visible};

/// The nearest visible, meaningful `<a>` at or above the anchor, stopping
/// before the body. Falls back to the anchor itself.
pub(crate) fn resolve_link<T: DomTree>(
    tree: &T,
    anchor: T::NodeId,
    heuristics: &HeuristicsConfig,
) -> Result<T::NodeId, LocateError> {
    let link = find_below_body(tree, anchor, heuristics.max_depth, |n| {
        tree.is_tag(n, "a")
            && is_visible(tree, n)
            && has_meaningful_content(tree, n, &heuristics.link)
    })?;

    match link {
        Some(link) => {
            debug!("Job link resolved to enclosing <a> {:?}", link);
            Ok(link)
        }
        None => {
            debug!("No visible meaningful <a> above {:?}, using the anchor", anchor);
            Ok(anchor)
        }
    }
}
