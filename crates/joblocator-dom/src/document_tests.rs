use super::*;
use crate::dom_types::Display;

#[test]
fn test_new_document_skeleton() {
    let doc = Document::new();
    let html = doc.document_element();
    assert_eq!(doc.tag(html), "html");
    assert_eq!(doc.parent(html), None);

    let children: Vec<&str> = doc.children(html).iter().map(|&c| doc.tag(c)).collect();
    assert_eq!(children, vec!["head", "body"]);

    let body = doc.body().unwrap();
    assert_eq!(doc.tag(body), "body");
    assert_eq!(doc.parent(body), Some(html));
}

#[test]
fn test_head_is_not_rendered() {
    let doc = Document::new();
    let head = doc.children(doc.html_id())[0];
    assert_eq!(doc.computed_visibility(head).display, Display::None);
    assert!(!doc.bounding_box(head).has_area());
}

#[test]
fn test_element_builder_attributes() {
    let mut doc = Document::new();
    let body = doc.body_id().unwrap();
    let span = doc.append_element(
        body,
        Element::new("SPAN")
            .with_class(" loc ")
            .with_id("where")
            .with_attr("data-x", "1")
            .with_attr("data-x", "2"),
    );

    assert_eq!(doc.tag(span), "span");
    assert_eq!(doc.class_attr(span), Some(" loc "));
    assert_eq!(doc.id(span), Some("where"));
    assert_eq!(doc.attribute(span, "data-x"), Some("2"));
    assert_eq!(doc.attribute(span, "DATA-X"), Some("2"));
    assert_eq!(doc.attribute(span, "href"), None);
}

#[test]
fn test_text_content_interleaves_children() {
    let mut doc = Document::new();
    let body = doc.body_id().unwrap();
    let p = doc.append_element(body, Element::new("p").with_text("Hello "));
    doc.append_element(p, Element::new("b").with_text("big"));
    doc.append_text(p, " world");

    assert_eq!(doc.text_content(p), "Hello big world");
    assert_eq!(doc.text_content(body), "Hello big world");
}

#[test]
fn test_descendants_document_order() {
    let mut doc = Document::new();
    let body = doc.body_id().unwrap();
    let a = doc.append_element(body, Element::new("div").with_id("a"));
    let a1 = doc.append_element(a, Element::new("span").with_id("a1"));
    let b = doc.append_element(body, Element::new("div").with_id("b"));
    let a1x = doc.append_element(a1, Element::new("img").with_id("a1x"));

    let order: Vec<NodeId> = doc.descendants(body).collect();
    assert_eq!(order, vec![a, a1, a1x, b]);
}

#[test]
fn test_ancestors_and_closest() {
    let mut doc = Document::new();
    let body = doc.body_id().unwrap();
    let nav = doc.append_element(body, Element::new("nav"));
    let span = doc.append_element(nav, Element::new("span"));

    let chain: Vec<&str> = doc.ancestors(span).map(|n| doc.tag(n)).collect();
    assert_eq!(chain, vec!["span", "nav", "body", "html"]);

    assert_eq!(doc.closest(span, |t, n| t.is_tag(n, "nav")), Some(nav));
    assert_eq!(doc.closest(span, |t, n| t.is_tag(n, "span")), Some(span));
    assert_eq!(doc.closest(span, |t, n| t.is_tag(n, "header")), None);
}

#[test]
fn test_detached_element_has_no_parent() {
    let mut doc = Document::new();
    let orphan = doc.detached_element(Element::new("div"));
    assert_eq!(doc.parent(orphan), None);
    assert!(doc.descendants(doc.html_id()).all(|n| n != orphan));
}

#[test]
fn test_find_in_document_order() {
    let mut doc = Document::new();
    let body = doc.body_id().unwrap();
    let first = doc.append_element(body, Element::new("img").with_attr("src", "a.png"));
    doc.append_element(body, Element::new("img").with_attr("src", "b.png"));

    assert_eq!(doc.find(|t, n| t.is_tag(n, "img")), Some(first));
    assert_eq!(doc.find(|t, n| t.is_tag(n, "html")), Some(doc.html_id()));
}

#[test]
fn test_set_layout() {
    let mut doc = Document::new();
    let body = doc.body_id().unwrap();
    let div = doc.append_element(body, Element::new("div"));
    assert!(doc.bounding_box(div).has_area());

    doc.set_layout(div, Layout::with_box(BoundingBox::sized(0.0, 0.0)));
    assert!(!doc.bounding_box(div).has_area());
}

#[test]
fn test_text_content_of_deep_tree() {
    let mut doc = Document::new();
    let body = doc.body_id().unwrap();
    let mut parent = body;
    for _ in 0..200_000 {
        parent = doc.append_element(parent, Element::new("div"));
    }
    doc.append_text(parent, "deep");
    doc.append_text(body, "!");

    assert_eq!(doc.text_content(body), "deep!");
}
