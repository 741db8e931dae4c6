//! Best-container selection.
//!
//! Scores every element matched by any of the ordered candidate selectors
//! and picks the single highest-scoring one. Paragraph density is a much
//! stronger content signal than selector specificity, so scoring runs
//! across all candidates instead of stopping at the first selector that
//! matches anything; order only breaks ties.

use crate::dom::{Document, Selection};
use crate::patterns::CANDIDATE_SELECTORS;
use crate::text::collapse_whitespace;

/// Score of a candidate container:
/// `10 × paragraph count + total paragraph text length / 100`.
#[must_use]
pub fn container_score(container: &Selection) -> i64 {
    let mut p_count: i64 = 0;
    let mut text_len: i64 = 0;
    for node in container.select("p").nodes() {
        p_count += 1;
        let text = collapse_whitespace(&Selection::from(*node).text());
        text_len = text_len.saturating_add(text.chars().count() as i64);
    }
    p_count.saturating_mul(10).saturating_add(text_len / 100)
}

/// Pick the best content container of the sanitized document.
///
/// Every element matched by any candidate selector is scored; the first
/// element found with the maximum score wins, so earlier selectors are
/// preferred on ties. When nothing matches at all (no body in a fragment),
/// the document root stands in as the container.
#[must_use]
pub fn select_best(doc: &Document) -> Selection<'_> {
    let mut best: Option<(i64, Selection)> = None;

    for css in CANDIDATE_SELECTORS {
        for node in doc.select(css).nodes() {
            let candidate = Selection::from(*node);
            let score = container_score(&candidate);
            let improves = match best {
                Some((best_score, _)) => score > best_score,
                None => true,
            };
            if improves {
                best = Some((score, candidate));
            }
        }
    }

    match best {
        Some((_, container)) => container,
        None => doc.select("html"),
    }
}
