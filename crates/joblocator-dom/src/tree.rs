//! The read-only tree capability interface and its traversal helpers.

use std::fmt::Debug;

use crate::dom_types::{BoundingBox, ComputedVisibility};

/// Read-only view of an element tree.
///
/// Only element nodes are addressed. Text is reachable through
/// [`DomTree::text_content`]. Tag names are reported in lower case.
pub trait DomTree {
    /// Handle to an element in this tree.
    type NodeId: Copy + Eq + Debug;

    /// Lower-case tag name.
    fn tag(&self, node: Self::NodeId) -> &str;

    /// Value of the `id` attribute.
    fn id(&self, node: Self::NodeId) -> Option<&str> {
        self.attribute(node, "id")
    }

    /// Raw value of the `class` attribute, untrimmed.
    fn class_attr(&self, node: Self::NodeId) -> Option<&str> {
        self.attribute(node, "class")
    }

    /// Value of an arbitrary attribute.
    fn attribute(&self, node: Self::NodeId, name: &str) -> Option<&str>;

    /// Parent element, `None` for the document element or a detached node.
    fn parent(&self, node: Self::NodeId) -> Option<Self::NodeId>;

    /// Element children in document order.
    fn children(&self, node: Self::NodeId) -> &[Self::NodeId];

    /// Concatenated text of all descendant text nodes in document order.
    fn text_content(&self, node: Self::NodeId) -> String;

    /// Rendered bounding box.
    fn bounding_box(&self, node: Self::NodeId) -> BoundingBox;

    /// Computed `display` and `visibility`.
    fn computed_visibility(&self, node: Self::NodeId) -> ComputedVisibility;

    /// The document's content root (`body`).
    fn body(&self) -> Option<Self::NodeId>;

    /// The document element (`html`).
    fn document_element(&self) -> Self::NodeId;

    /// Iterate from `node` up to the document element, `node` included.
    fn ancestors(&self, node: Self::NodeId) -> Ancestors<'_, Self>
    where
        Self: Sized,
    {
        Ancestors {
            tree: self,
            next: Some(node),
        }
    }

    /// Iterate over the descendants of `node` in document order, `node` excluded.
    fn descendants(&self, node: Self::NodeId) -> Descendants<'_, Self>
    where
        Self: Sized,
    {
        let mut stack: Vec<Self::NodeId> = self.children(node).to_vec();
        stack.reverse();
        Descendants { tree: self, stack }
    }

    /// Nearest inclusive ancestor matching `predicate`, like DOM `closest`.
    fn closest<F>(&self, node: Self::NodeId, mut predicate: F) -> Option<Self::NodeId>
    where
        Self: Sized,
        F: FnMut(&Self, Self::NodeId) -> bool,
    {
        self.ancestors(node).find(|&n| predicate(self, n))
    }

    /// Check if the element has the given lower-case tag.
    fn is_tag(&self, node: Self::NodeId, tag: &str) -> bool {
        self.tag(node) == tag
    }
}

/// Upward iterator returned by [`DomTree::ancestors`].
pub struct Ancestors<'a, T: DomTree> {
    tree: &'a T,
    next: Option<T::NodeId>,
}

impl<T: DomTree> Iterator for Ancestors<'_, T> {
    type Item = T::NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// Pre-order iterator returned by [`DomTree::descendants`].
pub struct Descendants<'a, T: DomTree> {
    tree: &'a T,
    stack: Vec<T::NodeId>,
}

impl<T: DomTree> Iterator for Descendants<'_, T> {
    type Item = T::NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(current).iter().rev().copied());
        Some(current)
    }
}
