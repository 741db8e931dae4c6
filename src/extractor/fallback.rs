//! Fallback tiers for pages the container heuristic cannot handle.
//!
//! Tier two hands the raw document to `dom_smoothie`'s readability
//! implementation. Tier three scrapes whatever plain paragraphs survive a
//! light cleaning pass, then falls through to the meta description and
//! finally the page title.

use crate::dom::{self, Selection};
use crate::options::Options;
use crate::patterns::{META_DESCRIPTION_SELECTORS, MINIMAL_CONTAINER_SELECTORS};
use crate::text::{clean_text, collapse_whitespace};

use super::sanitize;

/// Readability-style extraction of the raw document.
///
/// Returns `None` when parsing fails or the extracted text is too short
/// to be trusted as article content.
#[cfg(feature = "readability")]
#[must_use]
pub fn readability(html: &str, opts: &Options) -> Option<String> {
    use dom_smoothie::Readability;

    let mut reader = Readability::new(html, opts.url.as_deref(), None).ok()?;
    let article = reader.parse().ok()?;
    let text = article.text_content.trim().to_string();
    if text.chars().count() <= opts.min_fallback_len {
        return None;
    }
    clean_text(&text)
}

#[cfg(not(feature = "readability"))]
#[must_use]
pub fn readability(_html: &str, _opts: &Options) -> Option<String> {
    None
}

/// Last-resort extraction: paragraph scraping, meta description, title.
#[must_use]
pub fn minimal(html: &str, opts: &Options) -> Option<String> {
    let doc = sanitize::load_light(html);

    let container = MINIMAL_CONTAINER_SELECTORS
        .iter()
        .find_map(|css| dom::first_match(&doc, css))
        .unwrap_or_else(|| doc.select("body"));

    let mut paragraphs = Vec::new();
    for node in container.select("p").nodes() {
        let text = collapse_whitespace(&Selection::from(*node).text());
        if text.split_whitespace().count() >= opts.min_fallback_words {
            paragraphs.push(text);
        }
    }
    if !paragraphs.is_empty() {
        return clean_text(&paragraphs.join("\n\n"));
    }

    for css in META_DESCRIPTION_SELECTORS {
        if let Some(meta) = dom::first_match(&doc, css) {
            if let Some(content) = dom::get_attribute(&meta, "content") {
                if let Some(cleaned) = clean_text(&content) {
                    return Some(cleaned);
                }
            }
        }
    }

    if let Some(title) = dom::first_match(&doc, "title") {
        return clean_text(&title.text());
    }

    None
}
