//! Heuristic tunables for the locator engine.
//!
//! Every default here reproduces the fixed keyword sets and thresholds the
//! resolvers were designed around. Overriding them changes which ancestor a
//! resolver settles on, so keep overrides small and page-family specific.

use serde::{Deserialize, Serialize};

/// Heuristics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeuristicsConfig {
    /// Upper bound on parent-chain walks.
    ///
    /// An anchor nested deeper than this fails with a malformed-tree error
    /// naming the limit, even when the tree is attached and acyclic. Raise it
    /// for pages with pathological nesting.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    #[serde(default)]
    pub link: LinkHeuristics,

    #[serde(default)]
    pub logo: LogoHeuristics,

    #[serde(default)]
    pub content: ContentHeuristics,
}

impl Default for HeuristicsConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            link: LinkHeuristics::default(),
            logo: LogoHeuristics::default(),
            content: ContentHeuristics::default(),
        }
    }
}

fn default_max_depth() -> usize {
    1024
}

/// Job link resolver settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkHeuristics {
    /// A link whose trimmed text is longer than this many characters is meaningful.
    #[serde(default = "default_min_text_len")]
    pub min_text_len: usize,

    /// Visible descendants with one of these tags make a link meaningful.
    #[serde(default = "default_structural_tags")]
    pub structural_tags: Vec<String>,
}

impl Default for LinkHeuristics {
    fn default() -> Self {
        Self {
            min_text_len: default_min_text_len(),
            structural_tags: default_structural_tags(),
        }
    }
}

fn default_min_text_len() -> usize {
    3
}

fn default_structural_tags() -> Vec<String> {
    strings(&["div", "span", "h4", "h5"])
}

/// Company logo resolver settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoHeuristics {
    /// Tags that mark a header zone.
    #[serde(default = "default_header_tags")]
    pub header_tags: Vec<String>,

    /// Substrings of the class attribute that mark a header zone.
    #[serde(default = "default_header_class_tokens")]
    pub header_class_tokens: Vec<String>,

    /// Substrings of the id attribute that mark a header zone.
    #[serde(default = "default_header_id_tokens")]
    pub header_id_tokens: Vec<String>,
}

impl Default for LogoHeuristics {
    fn default() -> Self {
        Self {
            header_tags: default_header_tags(),
            header_class_tokens: default_header_class_tokens(),
            header_id_tokens: default_header_id_tokens(),
        }
    }
}

fn default_header_tags() -> Vec<String> {
    strings(&["header", "nav"])
}

fn default_header_class_tokens() -> Vec<String> {
    strings(&["header", "navbar", "brand"])
}

fn default_header_id_tokens() -> Vec<String> {
    strings(&["header", "nav"])
}

/// Job content container search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentHeuristics {
    /// Case-insensitive substrings of `class + " " + id` that identify a content wrapper.
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Tags counted as structured block content.
    #[serde(default = "default_block_tags")]
    pub block_tags: Vec<String>,

    /// Block siblings (the node included) needed to climb to the parent.
    #[serde(default = "default_min_block_siblings")]
    pub min_block_siblings: usize,

    /// Block children needed to accept the node itself.
    #[serde(default = "default_min_block_children")]
    pub min_block_children: usize,
}

impl Default for ContentHeuristics {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            block_tags: default_block_tags(),
            min_block_siblings: default_min_block_siblings(),
            min_block_children: default_min_block_children(),
        }
    }
}

fn default_keywords() -> Vec<String> {
    strings(&[
        "content",
        "description",
        "details",
        "body",
        "editor",
        "wysiwyg",
        "jobbody",
        "jobdescription",
        "job-description",
        "posting",
        "layout",
    ])
}

fn default_block_tags() -> Vec<String> {
    strings(&["p", "ul", "ol", "h1", "h2", "h3", "div", "col", "span"])
}

fn default_min_block_siblings() -> usize {
    2
}

fn default_min_block_children() -> usize {
    3
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
