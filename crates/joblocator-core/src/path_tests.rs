use super::*;
use joblocator_dom::{Document, Element};

fn builder() -> PathBuilder {
    PathBuilder::new(1024)
}

#[test]
fn test_class_rule() {
    let mut doc = Document::new();
    let body = doc.body_id().unwrap();
    let span = doc.append_element(body, Element::new("span").with_class("  loc  ").with_id("x"));

    let path = builder().build(&doc, span).unwrap();
    assert_eq!(path.as_str(), r#"//span[contains(@class, "loc")]"#);
}

#[test]
fn test_class_rule_ignores_depth() {
    let mut doc = Document::new();
    let mut parent = doc.body_id().unwrap();
    for _ in 0..10 {
        parent = doc.append_element(parent, Element::new("div"));
    }
    let leaf = doc.append_element(parent, Element::new("p").with_class("summary"));

    let path = builder().build(&doc, leaf).unwrap();
    assert_eq!(path.as_str(), r#"//p[contains(@class, "summary")]"#);
}

#[test]
fn test_blank_class_falls_through_to_id() {
    let mut doc = Document::new();
    let body = doc.body_id().unwrap();
    let div = doc.append_element(body, Element::new("div").with_class("   ").with_id("main"));

    let path = builder().build(&doc, div).unwrap();
    assert_eq!(path.as_str(), r#"//*[@id="main"]"#);
}

#[test]
fn test_root_rule() {
    let doc = Document::new();
    let path = builder().build(&doc, doc.body_id().unwrap()).unwrap();
    assert_eq!(path.as_str(), "/html/body");
}

#[test]
fn test_document_element() {
    let doc = Document::new();
    let path = builder().build(&doc, doc.html_id()).unwrap();
    assert_eq!(path.as_str(), "/html");
}

#[test]
fn test_positional_rule() {
    let mut doc = Document::new();
    let body = doc.body_id().unwrap();
    doc.append_element(body, Element::new("div"));
    doc.append_element(body, Element::new("p"));
    let second = doc.append_element(body, Element::new("div"));
    doc.append_element(second, Element::new("ul"));
    let li_first = doc.append_element(second, Element::new("li"));
    let li_second = doc.append_element(second, Element::new("li"));

    assert_eq!(builder().build(&doc, second).unwrap().as_str(), "/html/body/div[2]");
    assert_eq!(builder().build(&doc, li_first).unwrap().as_str(), "/html/body/div[2]/li[1]");
    assert_eq!(builder().build(&doc, li_second).unwrap().as_str(), "/html/body/div[2]/li[2]");
}

#[test]
fn test_positional_stops_at_identified_ancestor() {
    let mut doc = Document::new();
    let body = doc.body_id().unwrap();
    let card = doc.append_element(body, Element::new("section").with_id("card"));
    let h2 = doc.append_element(card, Element::new("h2"));

    assert_eq!(builder().build(&doc, h2).unwrap().as_str(), r#"//*[@id="card"]/h2[1]"#);
}

#[test]
fn test_positional_under_head() {
    let mut doc = Document::new();
    let head = doc.children(doc.html_id())[0];
    let meta = doc.append_element(head, Element::new("meta"));

    assert_eq!(builder().build(&doc, meta).unwrap().as_str(), "/html/head[1]/meta[1]");
}

#[test]
fn test_detached_node_is_malformed() {
    let mut doc = Document::new();
    let orphan = doc.detached_element(Element::new("div"));

    let err = builder().build(&doc, orphan).unwrap_err();
    assert!(matches!(err, LocateError::MalformedTree(_)));
}

#[test]
fn test_detached_node_with_class_still_builds() {
    let mut doc = Document::new();
    let orphan = doc.detached_element(Element::new("div").with_class("card"));

    assert!(builder().build(&doc, orphan).is_ok());
}

#[test]
fn test_depth_limit() {
    let mut doc = Document::new();
    let mut parent = doc.body_id().unwrap();
    for _ in 0..5 {
        parent = doc.append_element(parent, Element::new("div"));
    }

    let err = PathBuilder::new(3).build(&doc, parent).unwrap_err();
    assert_eq!(err, LocateError::depth_exceeded(3));
    assert!(PathBuilder::new(5).build(&doc, parent).is_ok());
}

#[test]
fn test_literal_quoting() {
    assert_eq!(xpath_literal("job"), "\"job\"");
    assert_eq!(xpath_literal("say \"hi\""), "'say \"hi\"'");
    assert_eq!(xpath_literal("a\"b'c"), "concat(\"a\", '\"', \"b'c\")");
}

#[test]
fn test_id_with_quote() {
    let mut doc = Document::new();
    let body = doc.body_id().unwrap();
    let div = doc.append_element(body, Element::new("div").with_id("a\"b"));

    assert_eq!(builder().build(&doc, div).unwrap().as_str(), "//*[@id='a\"b']");
}

#[test]
fn test_suffix_idempotent() {
    let path = PathExpression::new("//a[1]").with_suffix(Suffix::Href);
    assert_eq!(path.as_str(), "//a[1]/@href");
    let again = path.with_suffix(Suffix::Href);
    assert_eq!(again.as_str(), "//a[1]/@href");

    let text = PathExpression::new("/html/body/p[1]/text()").with_suffix(Suffix::Text);
    assert_eq!(text.as_str(), "/html/body/p[1]/text()");
}

#[test]
fn test_suffix_strings() {
    assert_eq!(Suffix::Text.as_str(), "/text()");
    assert_eq!(Suffix::Href.as_str(), "/@href");
    assert_eq!(Suffix::Src.as_str(), "/@src");
}
