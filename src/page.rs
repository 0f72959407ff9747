//! Page loading for the CLI.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use joblocator_dom::{import_html, Document, NodeId, Snapshot};

/// A loaded page and the elements picked on it.
pub(crate) struct LoadedPage {
    pub document: Document,
    /// One entry per requested selector, or the snapshot's own anchor.
    pub anchors: Vec<Option<NodeId>>,
}

fn is_snapshot(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load an HTML page and resolve each selector on it, or load a snapshot
/// and use its recorded anchor.
///
/// Snapshots carry their own selection, so selectors are rejected for them.
pub(crate) fn load_page(path: &Path, selectors: &[&str]) -> Result<LoadedPage> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read page {}", path.display()))?;

    if is_snapshot(path) {
        if !selectors.is_empty() {
            bail!("CSS selectors are not supported for snapshot pages, the snapshot's anchor is used");
        }
        let snapshot = Snapshot::from_json(&source)
            .with_context(|| format!("Invalid snapshot {}", path.display()))?;
        let (document, anchor) = snapshot.into_document()?;
        info!("Loaded snapshot {} ({} elements)", path.display(), document.len());
        return Ok(LoadedPage {
            document,
            anchors: vec![anchor],
        });
    }

    let page = import_html(&source, selectors)?;
    info!("Loaded page {} ({} elements)", path.display(), page.document.len());
    Ok(LoadedPage {
        document: page.document,
        anchors: page.anchors,
    })
}
