//! Element predicates shared by the resolvers.

use joblocator_config::{ContentHeuristics, LinkHeuristics, LogoHeuristics};
use joblocator_dom::DomTree;

use crate::error::LocateError;

/// Rendered and occupying space: not `display: none`, not
/// `visibility: hidden`, and a box with positive width and height.
pub(crate) fn is_visible<T: DomTree>(tree: &T, node: T::NodeId) -> bool {
    tree.computed_visibility(node).is_rendered() && tree.bounding_box(node).has_area()
}

/// A link worth extracting: enough text, or visible structural content.
pub(crate) fn has_meaningful_content<T: DomTree>(
    tree: &T,
    node: T::NodeId,
    link: &LinkHeuristics,
) -> bool {
    let text = tree.text_content(node);
    if text.trim().chars().count() > link.min_text_len {
        return true;
    }
    tree.descendants(node)
        .any(|d| contains_tag(&link.structural_tags, tree.tag(d)) && is_visible(tree, d))
}

/// Header, navigation or branding area of the page.
pub(crate) fn is_header_zone<T: DomTree>(tree: &T, node: T::NodeId, logo: &LogoHeuristics) -> bool {
    if contains_tag(&logo.header_tags, tree.tag(node)) {
        return true;
    }
    let class_match = tree
        .class_attr(node)
        .is_some_and(|class| logo.header_class_tokens.iter().any(|t| class.contains(t.as_str())));
    let id_match = tree
        .id(node)
        .is_some_and(|id| logo.header_id_tokens.iter().any(|t| id.contains(t.as_str())));
    class_match || id_match
}

/// Class or id names the element as a content wrapper.
pub(crate) fn has_content_keyword<T: DomTree>(
    tree: &T,
    node: T::NodeId,
    content: &ContentHeuristics,
) -> bool {
    let haystack = format!(
        "{} {}",
        tree.class_attr(node).unwrap_or_default(),
        tree.id(node).unwrap_or_default()
    )
    .to_lowercase();
    content
        .keywords
        .iter()
        .any(|k| haystack.contains(&k.to_lowercase()))
}

/// Number of element children of `node` whose tag is a block tag.
pub(crate) fn count_block_children<T: DomTree>(
    tree: &T,
    node: T::NodeId,
    content: &ContentHeuristics,
) -> usize {
    tree.children(node)
        .iter()
        .filter(|&&child| contains_tag(&content.block_tags, tree.tag(child)))
        .count()
}

pub(crate) fn contains_tag(tags: &[String], tag: &str) -> bool {
    tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Walk upward from `node` (inclusive), stopping before the body, and return
/// the first element accepted by `predicate`.
pub(crate) fn find_below_body<T, F>(
    tree: &T,
    node: T::NodeId,
    max_depth: usize,
    mut predicate: F,
) -> Result<Option<T::NodeId>, LocateError>
where
    T: DomTree,
    F: FnMut(T::NodeId) -> bool,
{
    let body = tree.body();
    let mut current = Some(node);
    for _ in 0..=max_depth {
        match current {
            Some(n) if Some(n) != body => {
                if predicate(n) {
                    return Ok(Some(n));
                }
                current = tree.parent(n);
            }
            _ => return Ok(None),
        }
    }
    Err(LocateError::depth_exceeded(max_depth))
}

/// [`DomTree::closest`] with the walk bounded by `max_depth`.
pub(crate) fn closest_bounded<T, F>(
    tree: &T,
    node: T::NodeId,
    max_depth: usize,
    mut predicate: F,
) -> Result<Option<T::NodeId>, LocateError>
where
    T: DomTree,
    F: FnMut(T::NodeId) -> bool,
{
    let mut visited = 0;
    let mut exceeded = false;
    let found = tree.closest(node, |_, n| {
        if visited > max_depth {
            exceeded = true;
            return true;
        }
        visited += 1;
        predicate(n)
    });

    if exceeded {
        return Err(LocateError::depth_exceeded(max_depth));
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use joblocator_config::HeuristicsConfig;
    use joblocator_dom::{BoundingBox, Document, Element, Layout};

    #[test]
    fn test_is_visible() {
        let mut doc = Document::new();
        let body = doc.body_id().unwrap();
        let shown = doc.append_element(body, Element::new("a"));
        let none = doc.append_element(body, Element::new("a").with_layout(Layout::not_rendered()));
        let hidden = doc.append_element(body, Element::new("a").with_layout(Layout::hidden()));
        let flat = doc.append_element(
            body,
            Element::new("a").with_layout(Layout::with_box(BoundingBox::sized(120.0, 0.0))),
        );

        assert!(is_visible(&doc, shown));
        assert!(!is_visible(&doc, none));
        assert!(!is_visible(&doc, hidden));
        assert!(!is_visible(&doc, flat));
    }

    #[test]
    fn test_meaningful_text_threshold() {
        let link = HeuristicsConfig::default().link;
        let mut doc = Document::new();
        let body = doc.body_id().unwrap();
        let short = doc.append_element(body, Element::new("a").with_text("  Go  "));
        let four = doc.append_element(body, Element::new("a").with_text("Jobs"));
        let three = doc.append_element(body, Element::new("a").with_text("Job"));

        assert!(!has_meaningful_content(&doc, short, &link));
        assert!(has_meaningful_content(&doc, four, &link));
        assert!(!has_meaningful_content(&doc, three, &link));
    }

    #[test]
    fn test_meaningful_structural_descendant() {
        let link = HeuristicsConfig::default().link;
        let mut doc = Document::new();
        let body = doc.body_id().unwrap();
        let with_span = doc.append_element(body, Element::new("a"));
        doc.append_element(with_span, Element::new("span"));
        let with_hidden_div = doc.append_element(body, Element::new("a"));
        doc.append_element(with_hidden_div, Element::new("div").with_layout(Layout::hidden()));
        let with_img = doc.append_element(body, Element::new("a"));
        doc.append_element(with_img, Element::new("img"));

        assert!(has_meaningful_content(&doc, with_span, &link));
        assert!(!has_meaningful_content(&doc, with_hidden_div, &link));
        assert!(!has_meaningful_content(&doc, with_img, &link));
    }

    #[test]
    fn test_header_zone() {
        let logo = HeuristicsConfig::default().logo;
        let mut doc = Document::new();
        let body = doc.body_id().unwrap();
        let nav = doc.append_element(body, Element::new("nav"));
        let brand = doc.append_element(body, Element::new("div").with_class("site-brand"));
        let by_id = doc.append_element(body, Element::new("div").with_id("main-navigation"));
        let upper = doc.append_element(body, Element::new("div").with_class("Header"));
        let plain = doc.append_element(body, Element::new("div").with_class("content"));

        assert!(is_header_zone(&doc, nav, &logo));
        assert!(is_header_zone(&doc, brand, &logo));
        assert!(is_header_zone(&doc, by_id, &logo));
        assert!(!is_header_zone(&doc, upper, &logo));
        assert!(!is_header_zone(&doc, plain, &logo));
    }

    #[test]
    fn test_content_keyword_case_insensitive() {
        let content = HeuristicsConfig::default().content;
        let mut doc = Document::new();
        let body = doc.body_id().unwrap();
        let by_class = doc.append_element(body, Element::new("section").with_class("JobDescription"));
        let by_id = doc.append_element(body, Element::new("section").with_id("posting-42"));
        let plain = doc.append_element(body, Element::new("section").with_class("sidebar"));

        assert!(has_content_keyword(&doc, by_class, &content));
        assert!(has_content_keyword(&doc, by_id, &content));
        assert!(!has_content_keyword(&doc, plain, &content));
    }

    #[test]
    fn test_count_block_children() {
        let content = HeuristicsConfig::default().content;
        let mut doc = Document::new();
        let body = doc.body_id().unwrap();
        let div = doc.append_element(body, Element::new("div"));
        doc.append_element(div, Element::new("p"));
        doc.append_element(div, Element::new("ul"));
        doc.append_element(div, Element::new("a"));
        doc.append_element(div, Element::new("h4"));

        assert_eq!(count_block_children(&doc, div, &content), 2);
    }

    #[test]
    fn test_find_below_body_stops_at_body() {
        let mut doc = Document::new();
        let body = doc.body_id().unwrap();
        let div = doc.append_element(body, Element::new("div"));

        let found = find_below_body(&doc, div, 16, |n| doc.tag(n) == "body").unwrap();
        assert_eq!(found, None);
        let found = find_below_body(&doc, div, 16, |n| doc.tag(n) == "div").unwrap();
        assert_eq!(found, Some(div));
    }

    #[test]
    fn test_closest_bounded_reaches_html() {
        let mut doc = Document::new();
        let body = doc.body_id().unwrap();
        let div = doc.append_element(body, Element::new("div"));

        let found = closest_bounded(&doc, div, 16, |n| doc.tag(n) == "html").unwrap();
        assert_eq!(found, Some(doc.html_id()));
        assert!(closest_bounded(&doc, div, 1, |n| doc.tag(n) == "html").is_err());
    }
}
