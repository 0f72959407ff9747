//! # JobLocator Core
//!
//! The locator engine. Given the element a user right-clicked (the anchor) and
//! the job-posting field it stands for, the engine infers an XPath expression
//! that identifies the relevant element on the page.
//!
//! ## Resolution
//!
//! 1. A field resolver maps the anchor to a target element:
//!    - job title, job location and unknown fields use the anchor itself;
//!    - job link climbs to the nearest visible, meaningful `<a>`;
//!    - company logo runs a tiered image search;
//!    - job content climbs to a structural content container.
//! 2. The path builder turns the target into an XPath expression.
//! 3. A field-specific suffix step is appended (`/text()`, `/@href`, `/@src`).
//!
//! The engine is synchronous and pure: it reads a [`DomTree`] and the anchor
//! passed in, and never keeps either beyond the call.
//!
//! [`DomTree`]: joblocator_dom::DomTree

mod anchor;
mod engine;
mod error;
mod field;
mod locator;
mod locator_set;
mod path;
mod predicates;
mod resolver;

pub use anchor::AnchorSlot;
pub use engine::LocatorEngine;
pub use error::LocateError;
pub use field::FieldKind;
pub use locator::{Locator, NoSourceReason};
pub use locator_set::LocatorSet;
pub use path::{PathBuilder, PathExpression, Suffix};
