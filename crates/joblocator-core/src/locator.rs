//! Locator results.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::path::PathExpression;

/// Why a logo lookup produced no image path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoSourceReason {
    /// The anchor sits inside an inline `<svg>`, which has no `src` to extract.
    VectorGraphic,
    /// No `<img>` was found near the anchor.
    NoImage,
}

impl NoSourceReason {
    /// The human-readable message stored in place of a path.
    pub fn message(&self) -> &'static str {
        match self {
            NoSourceReason::VectorGraphic => "No image src available \u{2014} SVG found",
            NoSourceReason::NoImage => "No img tag found",
        }
    }
}

/// The result of a locate request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Path(PathExpression),
    NoSource(NoSourceReason),
}

impl Locator {
    /// The path expression, if the lookup produced one.
    pub fn path(&self) -> Option<&PathExpression> {
        match self {
            Locator::Path(path) => Some(path),
            Locator::NoSource(_) => None,
        }
    }

    /// The string stored for this field: the expression or the sentinel message.
    pub fn as_str(&self) -> &str {
        match self {
            Locator::Path(path) => path.as_str(),
            Locator::NoSource(reason) => reason.message(),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Locator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
