//! Field resolvers: map the anchor to the element a locator should select.

mod content;
mod link;
mod logo;

pub(crate) use content::find_content_container;
pub(crate) use link::resolve_link;
pub(crate) use logo::resolve_logo;

use crate::locator::NoSourceReason;

/// Outcome of a resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target<Id> {
    Node(Id),
    NoSource(NoSourceReason),
}
