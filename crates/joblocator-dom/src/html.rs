//! HTML import via `scraper`.
//!
//! Static markup has no layout engine behind it, so geometry and computed
//! visibility are derived from the markup itself:
//!
//! - elements that never render (`head`, `script`, `style`, ...), elements
//!   carrying the `hidden` attribute and elements with inline `display: none`
//!   get `display: none`, and they and their whole subtree get an empty box;
//! - inline `visibility` is inherited by descendants unless overridden;
//! - inline `width` / `height` given in `px` are honored;
//! - every other rendered element gets a unit box.

use scraper::{ElementRef, Html, Node, Selector};
use tracing::{debug, warn};

use crate::document::{Document, Element, NodeId};
use crate::dom_types::{BoundingBox, ComputedVisibility, Display, Layout, Visibility};
use crate::error::DomError;
use crate::tree::DomTree;

const NON_RENDERED_TAGS: &[&str] = &[
    "head", "script", "style", "template", "noscript", "meta", "link", "title",
];

const INLINE_TAGS: &[&str] = &[
    "a", "span", "img", "b", "i", "em", "strong", "small", "label", "svg",
];

/// A parsed page together with the elements picked by the anchor selectors.
#[derive(Debug, Clone)]
pub struct ImportedPage {
    pub document: Document,
    /// One entry per selector, in the order they were given.
    pub anchors: Vec<Option<NodeId>>,
}

impl ImportedPage {
    /// The element picked by the first selector.
    pub fn anchor(&self) -> Option<NodeId> {
        self.anchors.first().copied().flatten()
    }
}

/// Parse an HTML document and resolve each anchor selector to its first match.
pub fn import_html(source: &str, anchor_selectors: &[&str]) -> Result<ImportedPage, DomError> {
    let html = Html::parse_document(source);

    let selectors = anchor_selectors
        .iter()
        .map(|s| Selector::parse(s).map_err(|e| DomError::InvalidSelector(format!("{}: {}", s, e))))
        .collect::<Result<Vec<_>, _>>()?;

    let targets: Vec<Option<ElementRef<'_>>> =
        selectors.iter().map(|sel| html.select(sel).next()).collect();

    for (selector, target) in anchor_selectors.iter().zip(&targets) {
        if target.is_none() {
            warn!("Anchor selector matched nothing: {}", selector);
        }
    }

    let root = html.root_element();
    let mut importer = Importer {
        document: Document::with_root(element_of(root, &Inherited::root())),
        targets: &targets,
        anchors: vec![None; targets.len()],
    };

    let html_id = importer.document.html_id();
    importer.mark_anchor(root, html_id);
    let inherited = Inherited::root().descend(root);
    importer.import_children(root, html_id, &inherited);

    let Importer {
        mut document,
        anchors,
        ..
    } = importer;

    let body = document
        .children(html_id)
        .iter()
        .copied()
        .find(|&c| document.is_tag(c, "body"));
    if let Some(body) = body {
        document.set_body(body);
    }

    debug!(
        "Imported HTML document with {} elements, {} anchors resolved",
        document.len(),
        anchors.iter().filter(|a| a.is_some()).count()
    );

    Ok(ImportedPage { document, anchors })
}

struct Importer<'a, 'h> {
    document: Document,
    targets: &'a [Option<ElementRef<'h>>],
    anchors: Vec<Option<NodeId>>,
}

impl Importer<'_, '_> {
    /// Import the subtree below `element` in document order.
    fn import_children(&mut self, element: ElementRef<'_>, parent: NodeId, inherited: &Inherited) {
        let mut stack: Vec<_> = element
            .children()
            .rev()
            .map(|child| (child, parent, *inherited))
            .collect();

        while let Some((child, parent, inherited)) = stack.pop() {
            match child.value() {
                Node::Text(text) => self.document.append_text(parent, &**text),
                Node::Element(_) => {
                    if let Some(child_ref) = ElementRef::wrap(child) {
                        let id = self
                            .document
                            .append_element(parent, element_of(child_ref, &inherited));
                        self.mark_anchor(child_ref, id);
                        let next = inherited.descend(child_ref);
                        stack.extend(child_ref.children().rev().map(|c| (c, id, next)));
                    }
                }
                _ => {}
            }
        }
    }

    fn mark_anchor(&mut self, element: ElementRef<'_>, id: NodeId) {
        for (slot, target) in self.anchors.iter_mut().zip(self.targets) {
            if slot.is_none() && *target == Some(element) {
                *slot = Some(id);
            }
        }
    }
}

/// Style state inherited from ancestors.
#[derive(Debug, Clone, Copy)]
struct Inherited {
    rendered: bool,
    visibility: Visibility,
}

impl Inherited {
    fn root() -> Self {
        Self {
            rendered: true,
            visibility: Visibility::Visible,
        }
    }

    fn descend(&self, element: ElementRef<'_>) -> Self {
        let style = InlineStyle::of(element);
        Self {
            rendered: self.rendered && !suppresses_rendering(element, &style),
            visibility: style.visibility.unwrap_or(self.visibility),
        }
    }
}

fn element_of(element: ElementRef<'_>, inherited: &Inherited) -> Element {
    let value = element.value();
    let mut out = Element::new(value.name());
    for (name, attr) in value.attrs() {
        out = out.with_attr(name, attr);
    }
    out.with_layout(layout_of(element, inherited))
}

fn layout_of(element: ElementRef<'_>, inherited: &Inherited) -> Layout {
    let style = InlineStyle::of(element);
    let suppressed = suppresses_rendering(element, &style);
    let tag = element.value().name();

    let display = if suppressed {
        Display::None
    } else if let Some(display) = style.display.clone() {
        display
    } else if INLINE_TAGS.contains(&tag) {
        Display::Inline
    } else {
        Display::Block
    };

    let bounding_box = if inherited.rendered && !suppressed {
        BoundingBox::sized(style.width.unwrap_or(1.0), style.height.unwrap_or(1.0))
    } else {
        BoundingBox::default()
    };

    Layout {
        bounding_box,
        style: ComputedVisibility {
            display,
            visibility: style.visibility.unwrap_or(inherited.visibility),
        },
    }
}

fn suppresses_rendering(element: ElementRef<'_>, style: &InlineStyle) -> bool {
    NON_RENDERED_TAGS.contains(&element.value().name())
        || element.value().attr("hidden").is_some()
        || style.display == Some(Display::None)
}

/// The subset of an inline `style` attribute the importer understands.
#[derive(Debug, Default, PartialEq)]
struct InlineStyle {
    display: Option<Display>,
    visibility: Option<Visibility>,
    width: Option<f64>,
    height: Option<f64>,
}

impl InlineStyle {
    fn of(element: ElementRef<'_>) -> Self {
        element
            .value()
            .attr("style")
            .map(Self::parse)
            .unwrap_or_default()
    }

    fn parse(style: &str) -> Self {
        let mut out = Self::default();
        for declaration in style.split(';') {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            let value = value.trim().trim_end_matches("!important").trim();
            match property.trim().to_ascii_lowercase().as_str() {
                "display" => out.display = Some(Display::parse(value)),
                "visibility" => out.visibility = Visibility::parse(value),
                "width" => out.width = parse_px(value),
                "height" => out.height = parse_px(value),
                _ => {}
            }
        }
        out
    }
}

fn parse_px(value: &str) -> Option<f64> {
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f64>().ok()
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
