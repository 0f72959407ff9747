//! Arena-backed document tree.

use serde::{Deserialize, Serialize};

use crate::dom_types::{BoundingBox, ComputedVisibility, Layout};
use crate::tree::DomTree;

/// Index of an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the element in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
enum Content {
    Text(String),
    Element(NodeId),
}

#[derive(Debug, Clone)]
struct NodeData {
    tag: String,
    attributes: Vec<(String, String)>,
    content: Vec<Content>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    layout: Layout,
}

/// Description of an element to insert into a [`Document`].
#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    layout: Layout,
}

impl Element {
    /// Start describing an element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// Set the `id` attribute.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attr("id", id)
    }

    /// Set the raw `class` attribute.
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    /// Set an attribute, replacing any previous value.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into().to_ascii_lowercase();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Add a leading text run.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the element layout.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }
}

/// In-memory element tree implementing [`DomTree`].
///
/// A fresh document always contains `html > head + body`.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    html: NodeId,
    body: Option<NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with an empty `html`, `head` and `body`.
    pub fn new() -> Self {
        let mut doc = Self::with_root(Element::new("html"));
        doc.append_element(doc.html, Element::new("head").with_layout(Layout::not_rendered()));
        let body = doc.append_element(doc.html, Element::new("body"));
        doc.body = Some(body);
        doc
    }

    /// Create a document containing only the given root element.
    ///
    /// The body is unset until [`Document::set_body`] is called.
    pub fn with_root(root: Element) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            html: NodeId(0),
            body: None,
        };
        doc.html = doc.insert(root, None);
        doc
    }

    /// The `body` element of a document created with [`Document::new`].
    pub fn body_id(&self) -> Option<NodeId> {
        self.body
    }

    /// The document element.
    pub fn html_id(&self) -> NodeId {
        self.html
    }

    /// Mark an element as the content root.
    pub fn set_body(&mut self, body: NodeId) {
        self.body = Some(body);
    }

    /// Append an element as the last child of `parent`.
    pub fn append_element(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = self.insert(element, Some(parent));
        let data = &mut self.nodes[parent.0];
        data.content.push(Content::Element(id));
        data.children.push(id);
        id
    }

    /// Append a text run as the last child of `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) {
        self.nodes[parent.0].content.push(Content::Text(text.into()));
    }

    /// Create an element that is not attached to the tree.
    pub fn detached_element(&mut self, element: Element) -> NodeId {
        self.insert(element, None)
    }

    /// Replace the layout of an element.
    pub fn set_layout(&mut self, node: NodeId, layout: Layout) {
        self.nodes[node.0].layout = layout;
    }

    /// Number of elements in the arena, detached ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena is empty. A document always has a root, so this is false.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Find the first element in document order satisfying `predicate`.
    pub fn find<F>(&self, mut predicate: F) -> Option<NodeId>
    where
        F: FnMut(&Self, NodeId) -> bool,
    {
        if predicate(self, self.html) {
            return Some(self.html);
        }
        self.descendants(self.html).find(|&n| predicate(self, n))
    }

    fn insert(&mut self, element: Element, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut content = Vec::new();
        if let Some(text) = element.text {
            content.push(Content::Text(text));
        }
        self.nodes.push(NodeData {
            tag: element.tag,
            attributes: element.attributes,
            content,
            children: Vec::new(),
            parent,
            layout: element.layout,
        });
        id
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        // One content cursor per open element, so nesting depth costs heap, not stack.
        let mut stack = vec![self.nodes[node.0].content.iter()];
        while let Some(items) = stack.last_mut() {
            match items.next() {
                Some(Content::Text(text)) => out.push_str(text),
                Some(Content::Element(child)) => stack.push(self.nodes[child.0].content.iter()),
                None => {
                    stack.pop();
                }
            }
        }
    }
}

impl DomTree for Document {
    type NodeId = NodeId;

    fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0]
            .attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn bounding_box(&self, node: NodeId) -> BoundingBox {
        self.nodes[node.0].layout.bounding_box
    }

    fn computed_visibility(&self, node: NodeId) -> ComputedVisibility {
        self.nodes[node.0].layout.style.clone()
    }

    fn body(&self) -> Option<NodeId> {
        self.body
    }

    fn document_element(&self) -> NodeId {
        self.html
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
