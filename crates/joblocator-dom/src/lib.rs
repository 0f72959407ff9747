//! # JobLocator DOM
//!
//! Read-only document tree abstraction used by the locator engine.
//!
//! The engine never talks to a live browser. It walks any tree that implements
//! [`DomTree`], which exposes the small capability set the heuristics need:
//! tag, id, class attribute, parent, element children, text content, bounding
//! box and computed visibility.
//!
//! Two ways to obtain a tree are provided:
//!
//! - [`import_html`] parses static markup with `scraper` and derives a layout
//!   from inline styles.
//! - [`Snapshot`] deserializes a JSON capture of a rendered page, including
//!   real bounding boxes and computed styles.
//!
//! Both produce an arena [`Document`].

mod document;
mod dom_types;
mod error;
mod html;
mod snapshot;
mod tree;

pub use document::{Document, Element, NodeId};
pub use dom_types::{BoundingBox, ComputedVisibility, Display, Layout, Visibility};
pub use error::DomError;
pub use html::{ImportedPage, import_html};
pub use snapshot::{Snapshot, SnapshotChild, SnapshotElement};
pub use tree::{Ancestors, Descendants, DomTree};
