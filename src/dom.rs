//! Thin adapter over the `dom_query` crate.
//!
//! Keeps a small, consistent vocabulary for the handful of DOM operations
//! the pipeline needs; everything else goes through `dom_query` types
//! directly.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril: dom_query hands out reference-counted text handles.
pub use tendril::StrTendril;

/// Parse an HTML string into a document. Best-effort: malformed markup is
/// repaired by the html5ever tree builder, never rejected.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Tag name (lowercase) of the first element in the selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Flattened text content of the selection and all its descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Attribute value, if present.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// First element matched by a CSS selector under `doc`, in document order.
#[must_use]
pub fn first_match<'a>(doc: &'a Document, css: &str) -> Option<Selection<'a>> {
    let matched = doc.select(css);
    matched.nodes().first().map(|node| Selection::from(*node))
}

/// Remove every element matched by a CSS selector, subtree included.
///
/// Nodes are detached in reverse document order so outer removals cannot
/// invalidate pending inner ones; an already-detached match is skipped.
pub fn remove_all(doc: &Document, css: &str) {
    let matched = doc.select(css).nodes().to_vec();
    for node in matched.into_iter().rev() {
        Selection::from(node).remove();
    }
}

/// True if the node is an element with one of the given tag names
/// (ASCII case-insensitive).
#[must_use]
pub fn is_one_of_tags(node: &NodeRef, tags: &[&str]) -> bool {
    node.is_element()
        && node
            .node_name()
            .is_some_and(|name| tags.iter().any(|t| name.eq_ignore_ascii_case(t)))
}
