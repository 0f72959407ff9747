//! Shared DOM types: bounding box, computed visibility and element layout.

use serde::{Deserialize, Serialize};

/// Bounding box for an element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Box used for rendered elements when no geometry is known.
    pub const UNIT: BoundingBox = BoundingBox {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
    };

    /// Create a box at the origin with the given size.
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Check if the box has a positive width and height.
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Check if a point is inside this bounding box.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Computed CSS `display` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Display {
    None,
    #[default]
    Block,
    Inline,
    Other(String),
}

impl Display {
    /// Parse a CSS display keyword.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Display::None,
            "block" => Display::Block,
            "inline" => Display::Inline,
            other => Display::Other(other.to_string()),
        }
    }

    /// The CSS keyword for this value.
    pub fn as_str(&self) -> &str {
        match self {
            Display::None => "none",
            Display::Block => "block",
            Display::Inline => "inline",
            Display::Other(value) => value,
        }
    }
}

impl From<String> for Display {
    fn from(value: String) -> Self {
        Display::parse(&value)
    }
}

impl From<Display> for String {
    fn from(value: Display) -> Self {
        value.as_str().to_string()
    }
}

/// Computed CSS `visibility` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    Collapse,
}

impl Visibility {
    /// Parse a CSS visibility keyword. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "visible" => Some(Visibility::Visible),
            "hidden" => Some(Visibility::Hidden),
            "collapse" => Some(Visibility::Collapse),
            _ => None,
        }
    }
}

/// The computed style values relevant to visibility checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ComputedVisibility {
    #[serde(default)]
    pub display: Display,
    #[serde(default)]
    pub visibility: Visibility,
}

impl ComputedVisibility {
    /// Check if the element takes part in rendering and is not hidden.
    ///
    /// Note that only `visibility: hidden` counts as hidden here; `collapse`
    /// is treated as visible, matching how the browser reports table rows.
    pub fn is_rendered(&self) -> bool {
        self.display != Display::None && self.visibility != Visibility::Hidden
    }
}

/// Layout information for a single element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default = "default_box")]
    pub bounding_box: BoundingBox,
    #[serde(default)]
    pub style: ComputedVisibility,
}

fn default_box() -> BoundingBox {
    BoundingBox::UNIT
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            bounding_box: BoundingBox::UNIT,
            style: ComputedVisibility::default(),
        }
    }
}

impl Layout {
    /// Layout of an element that does not take part in rendering.
    pub fn not_rendered() -> Self {
        Self {
            bounding_box: BoundingBox::default(),
            style: ComputedVisibility {
                display: Display::None,
                visibility: Visibility::Visible,
            },
        }
    }

    /// Layout of an element hidden with `visibility: hidden`. It keeps its box.
    pub fn hidden() -> Self {
        Self {
            bounding_box: BoundingBox::UNIT,
            style: ComputedVisibility {
                display: Display::Block,
                visibility: Visibility::Hidden,
            },
        }
    }

    /// Rendered layout with an explicit box.
    pub fn with_box(bounding_box: BoundingBox) -> Self {
        Self {
            bounding_box,
            style: ComputedVisibility::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_has_area() {
        assert!(BoundingBox::UNIT.has_area());
        assert!(!BoundingBox::default().has_area());
        assert!(!BoundingBox::sized(10.0, 0.0).has_area());
        assert!(!BoundingBox::sized(0.0, 10.0).has_area());
    }

    #[test]
    fn test_bounding_box_contains() {
        let bbox = BoundingBox {
            x: 10.0,
            y: 20.0,
            width: 100.0,
            height: 50.0,
        };
        assert!(bbox.contains(50.0, 40.0));
        assert!(!bbox.contains(0.0, 0.0));
    }

    #[test]
    fn test_display_parse() {
        assert_eq!(Display::parse("none"), Display::None);
        assert_eq!(Display::parse(" NONE "), Display::None);
        assert_eq!(Display::parse("inline"), Display::Inline);
        assert_eq!(Display::parse("flex"), Display::Other("flex".to_string()));
    }

    #[test]
    fn test_visibility_parse() {
        assert_eq!(Visibility::parse("hidden"), Some(Visibility::Hidden));
        assert_eq!(Visibility::parse("inherit"), None);
    }

    #[test]
    fn test_computed_visibility_is_rendered() {
        assert!(ComputedVisibility::default().is_rendered());
        assert!(!Layout::not_rendered().style.is_rendered());
        assert!(!Layout::hidden().style.is_rendered());
    }

    #[test]
    fn test_layout_deserialize_defaults() {
        let layout: Layout = serde_json::from_str("{}").unwrap();
        assert_eq!(layout, Layout::default());

        let layout: Layout =
            serde_json::from_str(r#"{"style": {"display": "none", "visibility": "hidden"}}"#).unwrap();
        assert_eq!(layout.style.display, Display::None);
        assert_eq!(layout.style.visibility, Visibility::Hidden);
    }

    #[test]
    fn test_display_other_roundtrip() {
        let layout: Layout = serde_json::from_str(r#"{"style": {"display": "grid"}}"#).unwrap();
        assert_eq!(layout.style.display, Display::Other("grid".to_string()));
    }
}
