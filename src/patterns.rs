//! Compiled regex patterns, noise keyword lists, and CSS selectors.
//!
//! All patterns are compiled once at startup using `LazyLock`. Selector
//! lists are ordered, data-driven configuration: the traversal code never
//! hard-codes a selector, so the sets can be adjusted and tested on their
//! own.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Noise keywords
// =============================================================================

/// Substrings (matched case-insensitively against lowercased text) that mark
/// a fragment as UI chrome, share widgets, ads, or editorial boilerplate.
///
/// The list is tuned for German-language news pages, which is where the
/// heuristics were calibrated.
pub static NOISE_KEYWORDS: &[&str] = &[
    "anzeige",
    "nächster artikel",
    "kommentar schreiben",
    "zeig dein herz",
    "spendier",
    "spendiere",
    "redaktion",
    "info@",
    "drucken",
    "typographie",
    "lese modus",
    "lesen modus",
    "teilen",
    "e-mail",
    "e mail",
    "newsletter",
    "tools drucken e-mail",
    "werbung",
    "zum artikel",
    "anzeigen",
];

// =============================================================================
// Sanitization selectors
// =============================================================================

/// Tags whose subtrees carry no article text and are removed wholesale
/// before any scoring or collection happens.
pub static STRUCTURAL_NOISE_TAGS: &[&str] = &[
    "script", "style", "noscript", "header", "footer", "nav", "aside", "form", "iframe",
];

/// Class/id-based selectors for toolbars, share widgets, print buttons,
/// screen-reader-only text, ad containers, sidebars, related-article boxes,
/// and teasers. Removal is best-effort: a selector that matches nothing is
/// simply skipped.
pub static UI_NOISE_SELECTORS: &[&str] = &[
    ".article-tools",
    ".toolbox",
    ".share",
    ".social-share",
    ".print",
    ".print-button",
    ".visually-hidden",
    ".sr-only",
    ".ad",
    ".advert",
    ".anzeigen",
    ".ad-box",
    ".sidebar",
    ".related",
    ".teaser",
];

/// Reduced tag set stripped by the minimal last-resort fallback tier.
pub static LIGHT_NOISE_TAGS: &[&str] =
    &["script", "style", "noscript", "nav", "header", "footer", "aside"];

// =============================================================================
// Container selection
// =============================================================================

/// Candidate container selectors, ordered from highly specific to generic.
///
/// Every element matched by any of these is scored by paragraph density;
/// the order only breaks ties (an earlier selector's match wins).
pub static CANDIDATE_SELECTORS: &[&str] = &[
    "section.article-content[itemprop='articleBody']",
    "section.article-content",
    "section.article-full",
    "div.article-content-main",
    "div.article-content",
    "div[itemprop='articleBody']",
    "article",
    "main",
    "div[class*='article' i]",
    "div[class*='content' i]",
    "body",
];

/// Selector for the lead/intro quote block that some layouts place before
/// the article body.
pub const INTRO_SELECTOR: &str =
    "blockquote.article-intro[itemprop='description'], blockquote.article-intro";

/// Fallback container selectors for the minimal tier, tried in order.
/// Class matching is case-insensitive (`i` flag): real pages mix
/// `content`, `Content`, and `CONTENT` in class names.
pub static MINIMAL_CONTAINER_SELECTORS: &[&str] = &["article", "main", "div[class*='content' i]"];

/// Meta tags consulted by the minimal tier when no paragraph survives.
pub static META_DESCRIPTION_SELECTORS: &[&str] =
    &["meta[name='description']", "meta[property='og:description']"];

// =============================================================================
// Text patterns
// =============================================================================

/// Matches an email address anywhere in a fragment.
pub static EMAIL_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("EMAIL_ADDRESS regex")
});

/// Matches a single letter, including Western European accented ranges.
/// Used for the letter-vs-symbol ratio noise rule.
pub static LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-zÀ-ÖØ-öø-ÿ]").expect("LETTER regex"));

/// Matches any whitespace run, for collapsing to single spaces.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Matches horizontal whitespace runs only, so explicit line breaks survive.
pub static HORIZONTAL_WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\u{00A0}]+").expect("HORIZONTAL_WHITESPACE_RUN regex"));

/// Matches runs of two or more blank lines (with optional stray whitespace
/// on the blank lines) for paragraph-separator normalization.
pub static EXTRA_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n+").expect("EXTRA_BLANK_LINES regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_address_matches_inside_text() {
        assert!(EMAIL_ADDRESS.is_match("Kontakt: redaktion@zeitung.de für Fragen"));
        assert!(!EMAIL_ADDRESS.is_match("ein ganz normaler Satz"));
    }

    #[test]
    fn letter_counts_accented_characters() {
        assert_eq!(LETTER.find_iter("größe").count(), 5);
        assert_eq!(LETTER.find_iter("123 --").count(), 0);
    }

    #[test]
    fn candidate_selectors_end_with_body() {
        // body is the last-resort candidate and must stay last so specific
        // selectors win ties.
        assert_eq!(CANDIDATE_SELECTORS.last(), Some(&"body"));
    }

    #[test]
    fn extra_blank_lines_collapse() {
        let result = EXTRA_BLANK_LINES.replace_all("a\n\n  \n\nb", "\n\n");
        assert_eq!(result, "a\n\nb");
    }
}
