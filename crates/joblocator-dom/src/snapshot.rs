//! JSON capture of a rendered page.
//!
//! A snapshot carries the real geometry and computed styles recorded in a
//! browser, which static HTML cannot provide. The anchor is addressed by the
//! element-child index path from the `html` element.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::{Document, Element, NodeId};
use crate::dom_types::{BoundingBox, ComputedVisibility, Display, Layout, Visibility};
use crate::error::DomError;
use crate::tree::DomTree;

/// A captured page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Page URL, informational only.
    #[serde(default)]
    pub url: String,
    /// The `html` element.
    pub root: SnapshotElement,
    /// Element-child indices leading from `root` to the right-clicked element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Vec<usize>>,
}

/// A captured element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotElement {
    pub tag: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(default)]
    pub children: Vec<SnapshotChild>,
}

/// Mixed element content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnapshotChild {
    Text(String),
    Element(SnapshotElement),
}

impl Snapshot {
    /// Parse a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, DomError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the document tree and resolve the anchor path.
    pub fn into_document(self) -> Result<(Document, Option<NodeId>), DomError> {
        if !self.root.tag.eq_ignore_ascii_case("html") {
            return Err(DomError::InvalidSnapshot(format!(
                "root element must be html, found {}",
                self.root.tag
            )));
        }

        let (root, children) = self.root.split();
        let mut document = Document::with_root(root);
        let html = document.html_id();
        append_children(&mut document, html, children);

        let body = document
            .children(html)
            .iter()
            .copied()
            .find(|&c| document.is_tag(c, "body"))
            .ok_or_else(|| DomError::InvalidSnapshot("html element has no body".to_string()))?;
        document.set_body(body);

        let anchor = match self.anchor {
            Some(path) => Some(resolve_path(&document, &path)?),
            None => None,
        };

        debug!(
            "Loaded snapshot of {} with {} elements",
            if self.url.is_empty() { "<unknown>" } else { &self.url },
            document.len()
        );

        Ok((document, anchor))
    }
}

impl SnapshotElement {
    /// Layout recorded for this element. Missing fields mean a rendered unit box.
    pub fn layout(&self) -> Layout {
        Layout {
            bounding_box: self.bounding_box.unwrap_or(BoundingBox::UNIT),
            style: ComputedVisibility {
                display: self.display.clone().unwrap_or_default(),
                visibility: self.visibility.unwrap_or_default(),
            },
        }
    }

    fn split(self) -> (Element, Vec<SnapshotChild>) {
        let mut element = Element::new(self.tag.as_str()).with_layout(self.layout());
        for (name, value) in self.attributes {
            element = element.with_attr(name, value);
        }
        (element, self.children)
    }
}

fn append_children(document: &mut Document, parent: NodeId, children: Vec<SnapshotChild>) {
    let mut stack = vec![(parent, children.into_iter())];
    while let Some((parent, items)) = stack.last_mut() {
        let parent = *parent;
        match items.next() {
            Some(SnapshotChild::Text(text)) => document.append_text(parent, text),
            Some(SnapshotChild::Element(element)) => {
                let (element, children) = element.split();
                let id = document.append_element(parent, element);
                stack.push((id, children.into_iter()));
            }
            None => {
                stack.pop();
            }
        }
    }
}

fn resolve_path(document: &Document, path: &[usize]) -> Result<NodeId, DomError> {
    let mut current = document.html_id();
    for (depth, &index) in path.iter().enumerate() {
        current = document
            .children(current)
            .get(index)
            .copied()
            .ok_or_else(|| {
                DomError::InvalidSnapshot(format!(
                    "anchor path step {} has no child at index {}",
                    depth, index
                ))
            })?;
    }
    Ok(current)
}
