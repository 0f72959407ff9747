//! Locate errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocateError {
    /// No element has been right-clicked yet.
    #[error("No element selected")]
    NoAnchor,

    /// The anchor is not attached to the document, its parent chain loops, or
    /// it is nested deeper than the configured `max_depth`.
    #[error("Malformed document tree: {0}")]
    MalformedTree(String),
}

impl LocateError {
    /// An upward walk ran past `max_depth` levels.
    ///
    /// A cycle and a very deep tree look the same here, so the message names the limit.
    pub fn depth_exceeded(max_depth: usize) -> Self {
        LocateError::MalformedTree(format!(
            "parent chain longer than max_depth ({}), the tree is cyclic or nested deeper than heuristics.max_depth allows",
            max_depth
        ))
    }
}
