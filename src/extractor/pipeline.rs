//! Tiered extraction pipeline.
//!
//! Runs the DOM heuristic first, then the readability fallback, then the
//! minimal scraper. The first tier that produces non-empty text wins.

use crate::options::Options;
use crate::text::clean_text;

use super::collect::{self, SeenSet};
use super::container;
use super::fallback;
use super::sanitize;

/// Run the full pipeline over a UTF-8 HTML document.
pub(crate) fn run(html: &str, opts: &Options) -> Option<String> {
    if let Some(text) = dom_heuristic(html, opts) {
        return Some(text);
    }
    if cfg!(debug_assertions) {
        eprintln!("artext: DOM heuristic found nothing; trying fallback tiers");
    }
    if opts.use_readability_fallback {
        if let Some(text) = fallback::readability(html, opts) {
            return Some(text);
        }
        if cfg!(debug_assertions) {
            eprintln!("artext: readability tier found nothing; trying minimal scrape");
        }
    }
    fallback::minimal(html, opts)
}

/// Tier one: sanitize, pick the best container, collect its blocks in
/// document order, and expand short results from the whole document.
fn dom_heuristic(html: &str, opts: &Options) -> Option<String> {
    let doc = sanitize::load(html);
    let container = container::select_best(&doc);

    let mut parts = Vec::new();
    let mut seen = SeenSet::new();
    collect::extract_intro(&doc, &mut parts, &mut seen);
    collect::collect_blocks(&container, &mut parts, &mut seen, opts);
    collect::expand_short_result(&doc, &mut parts, &mut seen, opts);

    clean_text(&parts.join("\n\n"))
}
