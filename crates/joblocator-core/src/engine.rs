//! The locator engine.

use joblocator_config::HeuristicsConfig;
use joblocator_dom::DomTree;
use tracing::{debug, warn};

use crate::error::LocateError;
use crate::field::FieldKind;
use crate::locator::Locator;
use crate::path::{PathBuilder, PathExpression, Suffix};
use crate::resolver::{self, Target};

/// Turns an anchor element and a field kind into a [`Locator`].
///
/// The engine holds only configuration. Every call reads the tree it is
/// given and keeps nothing, so resolving the same anchor twice yields the
/// same result.
#[derive(Debug, Clone, Default)]
pub struct LocatorEngine {
    heuristics: HeuristicsConfig,
}

impl LocatorEngine {
    pub fn new(heuristics: HeuristicsConfig) -> Self {
        Self { heuristics }
    }

    pub fn heuristics(&self) -> &HeuristicsConfig {
        &self.heuristics
    }

    /// Resolve `field` for the given anchor.
    ///
    /// Fails with [`LocateError::NoAnchor`] when no anchor has been captured,
    /// and with [`LocateError::MalformedTree`] when the anchor is detached or
    /// its ancestry loops.
    pub fn locate<T: DomTree>(
        &self,
        tree: &T,
        anchor: Option<T::NodeId>,
        field: FieldKind,
    ) -> Result<Locator, LocateError> {
        let Some(anchor) = anchor else {
            warn!("Locate {} requested with no element selected", field);
            return Err(LocateError::NoAnchor);
        };
        debug!("Locating {} from <{}>", field, tree.tag(anchor));

        let locator = match field {
            FieldKind::JobLink => {
                let link = resolver::resolve_link(tree, anchor, &self.heuristics)?;
                Locator::Path(self.build_path(tree, link)?.with_suffix(Suffix::Href))
            }
            FieldKind::CompanyLogo => match resolver::resolve_logo(tree, anchor, &self.heuristics)? {
                Target::Node(img) => Locator::Path(self.build_path(tree, img)?.with_suffix(Suffix::Src)),
                Target::NoSource(reason) => Locator::NoSource(reason),
            },
            FieldKind::JobContent => {
                let container = resolver::find_content_container(tree, anchor, &self.heuristics)?;
                Locator::Path(self.build_path(tree, container)?)
            }
            FieldKind::JobTitle | FieldKind::JobLocation | FieldKind::Generic => {
                Locator::Path(self.build_path(tree, anchor)?.with_suffix(Suffix::Text))
            }
        };

        debug!("Located {}: {}", field, locator);
        Ok(locator)
    }

    /// Resolve a field given by name, see [`FieldKind::from_name`].
    pub fn locate_named<T: DomTree>(
        &self,
        tree: &T,
        anchor: Option<T::NodeId>,
        field: &str,
    ) -> Result<Locator, LocateError> {
        self.locate(tree, anchor, FieldKind::from_name(field))
    }

    /// Build the path of `node` without any field-specific resolution.
    pub fn build_path<T: DomTree>(&self, tree: &T, node: T::NodeId) -> Result<PathExpression, LocateError> {
        PathBuilder::new(self.heuristics.max_depth).build(tree, node)
    }

    /// The element wrapping the posting's body text around `anchor`.
    pub fn find_content_container<T: DomTree>(
        &self,
        tree: &T,
        anchor: T::NodeId,
    ) -> Result<T::NodeId, LocateError> {
        resolver::find_content_container(tree, anchor, &self.heuristics)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
