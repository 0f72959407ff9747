use joblocator_config::HeuristicsConfig;
use joblocator_dom::DomTree;
use tracing::debug;

use crate::error::LocateError;
use crate::predicates::{count_block_children, has_content_keyword};

/// Climb from the anchor toward the body looking for the element that wraps
/// the posting's body text. Checks at each level, in order:
///
/// 1. class or id carries a content keyword: this element;
/// 2. enough block-level siblings (the element included): the parent;
/// 3. enough block-level children: this element;
/// 4. a `<div>`: the parent, or this element at the top of the tree.
///
/// Reaching the body returns the anchor.
pub(crate) fn find_content_container<T: DomTree>(
    tree: &T,
    anchor: T::NodeId,
    heuristics: &HeuristicsConfig,
) -> Result<T::NodeId, LocateError> {
    let content = &heuristics.content;
    let body = tree.body();
    let mut current = Some(anchor);

    for _ in 0..=heuristics.max_depth {
        let node = match current {
            Some(node) if Some(node) != body => node,
            _ => {
                debug!("No content container below the body, using the anchor");
                return Ok(anchor);
            }
        };
        let parent = tree.parent(node);

        if has_content_keyword(tree, node, content) {
            debug!("Content container <{}> matched by keyword", tree.tag(node));
            return Ok(node);
        }

        if let Some(parent) = parent {
            if count_block_children(tree, parent, content) >= content.min_block_siblings {
                debug!("Content container is the parent of block siblings");
                return Ok(parent);
            }
        }

        if count_block_children(tree, node, content) >= content.min_block_children {
            debug!("Content container <{}> has block children", tree.tag(node));
            return Ok(node);
        }

        if tree.is_tag(node, "div") {
            debug!("Climbing past wrapper <div>");
            return Ok(parent.unwrap_or(node));
        }

        current = parent;
    }

    Err(LocateError::depth_exceeded(heuristics.max_depth))
}
