//! Document-order block collection with deduplication.
//!
//! Walks the chosen container top to bottom, turns each block-level
//! element into a normalized text fragment, filters noise, and drops
//! exact and near duplicates. Near-duplicate checks are bounded to a
//! sliding window of recently accepted fragments so long articles stay
//! linear in practice.

use std::collections::HashSet;

use crate::dom::{self, Selection};
use crate::options::Options;
use crate::patterns::{HORIZONTAL_WHITESPACE_RUN, INTRO_SELECTOR};
use crate::similarity;
use crate::text::{collapse_whitespace, is_block_noise};

/// Element names collected as text blocks, everything else is skipped
/// (its block descendants are still visited on their own).
const BLOCK_TAGS: &[&str] = &["h1", "h2", "h3", "p", "li", "div", "section"];

/// Fragments seen so far, split into accepted output and rejected noise.
///
/// Rejections are remembered so later passes (notably the short-result
/// expander) do not resurrect a fragment that was already thrown out.
#[derive(Debug, Default)]
pub struct SeenSet {
    accepted: Vec<String>,
    rejected: HashSet<String>,
}

impl SeenSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-match lookup over accepted and rejected fragments alike.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.rejected.contains(text) || self.accepted.iter().any(|a| a == text)
    }

    /// True when `text` is almost identical to one of the last `window`
    /// accepted fragments.
    #[must_use]
    pub fn is_near_duplicate(&self, text: &str, window: usize, threshold: f64) -> bool {
        let start = self.accepted.len().saturating_sub(window);
        self.accepted[start..]
            .iter()
            .any(|prev| similarity::ratio(prev, text) > threshold)
    }

    pub fn accept(&mut self, text: String) {
        self.accepted.push(text);
    }

    pub fn reject(&mut self, text: String) {
        self.rejected.insert(text);
    }
}

/// Normalized text of a single block element.
///
/// Blocks without `<br>` collapse to one whitespace-normalized line.
/// Blocks with `<br>` keep their visual line structure: each `<br>`
/// becomes a newline, lines are trimmed individually, and blank lines
/// drop out.
#[must_use]
pub fn block_text(block: &Selection) -> String {
    if !block.select("br").exists() {
        return collapse_whitespace(&block.text());
    }

    let mut raw = String::new();
    for node in block.nodes() {
        for desc in node.descendants() {
            if desc.is_text() {
                raw.push_str(&desc.text());
            } else if dom::is_one_of_tags(&desc, &["br"]) {
                raw.push('\n');
            }
        }
    }

    let lines: Vec<String> = raw
        .lines()
        .map(|line| HORIZONTAL_WHITESPACE_RUN.replace_all(line, " ").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();
    lines.join("\n")
}

/// Pull the lead/intro paragraph out of the document, ahead of the main
/// container walk. Runs against the whole document because some layouts
/// place the intro outside the article body.
///
/// Intro fragments are trusted: every non-empty descendant text is
/// prepended without noise checks, and recorded in the Seen-Set so the
/// block walk does not collect it again.
pub fn extract_intro(doc: &crate::dom::Document, parts: &mut Vec<String>, seen: &mut SeenSet) {
    let Some(intro) = dom::first_match(doc, INTRO_SELECTOR) else {
        return;
    };
    for node in intro.nodes() {
        for desc in node.descendants() {
            if !dom::is_one_of_tags(&desc, &["p", "div", "span"]) {
                continue;
            }
            let text = collapse_whitespace(&Selection::from(desc).text());
            if text.is_empty() || seen.contains(&text) {
                continue;
            }
            parts.push(text.clone());
            seen.accept(text);
        }
    }
}

/// Walk `container` in document order and append every surviving block
/// fragment to `parts`.
pub fn collect_blocks(
    container: &Selection,
    parts: &mut Vec<String>,
    seen: &mut SeenSet,
    opts: &Options,
) {
    for node in container.nodes() {
        for desc in node.descendants() {
            if !dom::is_one_of_tags(&desc, BLOCK_TAGS) {
                continue;
            }
            let block = Selection::from(desc);
            let text = block_text(&block);
            if text.is_empty() {
                continue;
            }
            if seen.contains(&text) {
                continue;
            }
            if is_block_noise(&text, opts) {
                seen.reject(text);
                continue;
            }
            if seen.is_near_duplicate(&text, opts.fuzzy_window, opts.fuzzy_threshold) {
                continue;
            }
            parts.push(text.clone());
            seen.accept(text);
        }
    }
}

/// Rescue pass for pages where the container heuristic came up nearly
/// empty: when the joined result is still below the short-result bound,
/// sweep every paragraph in the document and add the ones not seen yet.
/// Fragments rejected as noise earlier stay rejected.
pub fn expand_short_result(
    doc: &crate::dom::Document,
    parts: &mut Vec<String>,
    seen: &mut SeenSet,
    opts: &Options,
) {
    let joined_len: usize = parts.join("\n\n").chars().count();
    if joined_len >= opts.short_result_len {
        return;
    }
    for node in doc.select("p").nodes() {
        let text = collapse_whitespace(&Selection::from(*node).text());
        if text.is_empty() || seen.contains(&text) {
            continue;
        }
        parts.push(text.clone());
        seen.accept(text);
    }
}
