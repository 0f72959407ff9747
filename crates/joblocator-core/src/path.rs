//! Path expressions and the generic path builder.

use std::fmt;

use joblocator_dom::DomTree;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::LocateError;

/// Path of the document's content root.
pub const ROOT_PATH: &str = "/html/body";

/// Path of the document element.
pub const DOCUMENT_PATH: &str = "/html";

/// An XPath expression produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathExpression(String);

impl PathExpression {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Append a trailing selection step unless the path already ends with it.
    pub fn with_suffix(mut self, suffix: Suffix) -> Self {
        let step = suffix.as_str();
        if !self.0.ends_with(step) {
            self.0.push_str(step);
        }
        self
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PathExpression {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Trailing selection step appended after the element path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    /// Text content of the element.
    Text,
    /// Destination of a link.
    Href,
    /// Source of an image.
    Src,
}

impl Suffix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Suffix::Text => "/text()",
            Suffix::Href => "/@href",
            Suffix::Src => "/@src",
        }
    }
}

/// Builds a [`PathExpression`] for any attached element.
///
/// Rules, first match wins:
///
/// 1. non-blank class: `//tag[contains(@class, "class")]`
/// 2. non-empty id: `//*[@id="id"]`
/// 3. the body: `/html/body`
/// 4. the document element: `/html`
/// 5. otherwise the parent's path plus `/tag[n]`, where `n` is the 1-based
///    rank among same-tag element siblings.
#[derive(Debug, Clone, Copy)]
pub struct PathBuilder {
    max_depth: usize,
}

impl PathBuilder {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn build<T: DomTree>(&self, tree: &T, node: T::NodeId) -> Result<PathExpression, LocateError> {
        let mut steps: Vec<String> = Vec::new();
        let mut current = node;

        for _ in 0..=self.max_depth {
            if let Some(base) = terminal_path(tree, current) {
                let mut path = base;
                for step in steps.iter().rev() {
                    path.push('/');
                    path.push_str(step);
                }
                trace!("Built path {} ({} positional steps)", path, steps.len());
                return Ok(PathExpression(path));
            }

            let tag = tree.tag(current);
            let parent = tree.parent(current).ok_or_else(|| {
                LocateError::MalformedTree(format!("<{}> is not attached to the document", tag))
            })?;
            steps.push(format!("{}[{}]", tag, sibling_index(tree, parent, current)?));
            current = parent;
        }

        Err(LocateError::depth_exceeded(self.max_depth))
    }
}

/// The path for a node that ends the upward walk, if any rule besides the
/// positional one applies.
fn terminal_path<T: DomTree>(tree: &T, node: T::NodeId) -> Option<String> {
    let tag = tree.tag(node);

    if let Some(class) = tree.class_attr(node).map(str::trim).filter(|c| !c.is_empty()) {
        return Some(format!("//{}[contains(@class, {})]", tag, xpath_literal(class)));
    }
    if let Some(id) = tree.id(node).filter(|id| !id.is_empty()) {
        return Some(format!("//*[@id={}]", xpath_literal(id)));
    }
    if tree.body() == Some(node) {
        return Some(ROOT_PATH.to_string());
    }
    if tree.document_element() == node {
        return Some(DOCUMENT_PATH.to_string());
    }
    None
}

/// 1-based rank of `node` among the same-tag element children of `parent`.
fn sibling_index<T: DomTree>(tree: &T, parent: T::NodeId, node: T::NodeId) -> Result<usize, LocateError> {
    let tag = tree.tag(node);
    let mut index = 0;
    for &sibling in tree.children(parent) {
        if tree.tag(sibling) == tag {
            index += 1;
        }
        if sibling == node {
            return Ok(index);
        }
    }
    Err(LocateError::MalformedTree(format!(
        "<{}> is missing from its parent's children",
        tag
    )))
}

/// Quote a value as an XPath string literal.
fn xpath_literal(value: &str) -> String {
    if !value.contains('"') {
        format!("\"{}\"", value)
    } else if !value.contains('\'') {
        format!("'{}'", value)
    } else {
        let parts: Vec<String> = value.split('"').map(|part| format!("\"{}\"", part)).collect();
        format!("concat({})", parts.join(", '\"', "))
    }
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
