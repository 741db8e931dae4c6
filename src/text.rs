//! Text normalization and the fragment noise classifier.
//!
//! Both are pure string functions. Normalization turns any extracted text
//! into the canonical output shape (single-newline convention, one blank
//! line between paragraphs, no NBSP, trimmed lines). The noise classifier
//! decides whether a short fragment is boilerplate rather than content.

use crate::options::Options;
use crate::patterns::{
    EMAIL_ADDRESS, EXTRA_BLANK_LINES, LETTER, NOISE_KEYWORDS, WHITESPACE_RUN,
};

/// Normalize an extracted string into canonical paragraph-structured text.
///
/// - line endings become `\n`
/// - non-breaking spaces become ordinary spaces
/// - runs of two or more blank lines collapse to exactly one blank line
/// - every line is trimmed, then the whole string is trimmed
///
/// Returns `None` when nothing but whitespace remains; a returned string is
/// never empty. Normalizing an already-normalized string returns it
/// unchanged.
#[must_use]
pub fn clean_text(txt: &str) -> Option<String> {
    let unified = txt
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\u{00A0}', " ");
    let collapsed = EXTRA_BLANK_LINES.replace_all(&unified, "\n\n");
    let trimmed_lines = collapsed
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    let result = trimmed_lines.trim();
    if result.is_empty() {
        None
    } else {
        Some(result.to_string())
    }
}

/// Collapse all whitespace runs (including newlines) to single spaces and
/// trim. This is the flattened-text shape used for per-element fragments.
#[must_use]
pub fn collapse_whitespace(txt: &str) -> String {
    WHITESPACE_RUN.replace_all(txt, " ").trim().to_string()
}

/// Classify a fragment as boilerplate/UI noise.
///
/// Rules, any match meaning noise:
/// 1. shorter than `min_fragment_len` chars after trimming
/// 2. contains a noise keyword (case-insensitive substring)
/// 3. contains an email address
/// 4. contains a URL prefix or starts with a bare `www.` token
/// 5. has no letters at all, or more than twice as many non-letters as
///    letters (decorative separators, icon runs)
#[must_use]
pub fn is_noise(text: &str, opts: &Options) -> bool {
    let lower = text.trim().to_lowercase();
    let len = lower.chars().count();

    if len < opts.min_fragment_len {
        return true;
    }

    if NOISE_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return true;
    }

    if has_contact_or_link(&lower) {
        return true;
    }

    // Decorative separators and icon runs: mostly non-letter characters.
    let letters = LETTER.find_iter(&lower).count();
    let non_letters = len.saturating_sub(letters);
    letters == 0 || non_letters > letters * 2
}

/// Rejection checks applied during block collection: email addresses,
/// URLs, and noise keywords, where a keyword no longer rejects fragments
/// of `keyword_override_len` chars or more.
///
/// Deliberately looser than [`is_noise`]: no length floor and no
/// letter-ratio rule, so brief real sentences inside the article body
/// survive.
#[must_use]
pub fn is_block_noise(text: &str, opts: &Options) -> bool {
    let lower = text.trim().to_lowercase();

    if has_contact_or_link(&lower) {
        return true;
    }

    NOISE_KEYWORDS.iter().any(|k| lower.contains(k))
        && lower.chars().count() < opts.keyword_override_len
}

fn has_contact_or_link(lower: &str) -> bool {
    EMAIL_ADDRESS.is_match(lower)
        || lower.contains("http://")
        || lower.contains("https://")
        || lower.starts_with("www.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_normalizes_line_endings() {
        assert_eq!(clean_text("a\r\nb\rc"), Some("a\nb\nc".to_string()));
    }

    #[test]
    fn clean_text_replaces_nbsp() {
        assert_eq!(clean_text("a\u{00A0}b"), Some("a b".to_string()));
    }

    #[test]
    fn clean_text_collapses_blank_line_runs() {
        assert_eq!(
            clean_text("eins\n\n\n\nzwei\n \n \ndrei"),
            Some("eins\n\nzwei\n\ndrei".to_string())
        );
    }

    #[test]
    fn clean_text_trims_each_line() {
        assert_eq!(clean_text("  eins  \n  zwei  "), Some("eins\nzwei".to_string()));
    }

    #[test]
    fn clean_text_returns_none_for_whitespace_only() {
        assert_eq!(clean_text("   \n\t \u{00A0} "), None);
        assert_eq!(clean_text(""), None);
    }

    #[test]
    fn clean_text_is_idempotent() {
        let once = clean_text("  a \r\n\r\n\r\n b\u{00A0}c ").unwrap();
        let twice = clean_text(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn collapse_whitespace_flattens_runs() {
        assert_eq!(collapse_whitespace("  ein \n\t zwei  "), "ein zwei");
    }

    #[test]
    fn short_fragments_are_noise() {
        let opts = Options::default();
        assert!(is_noise("Anzeige", &opts));
        assert!(is_noise("  kurz ", &opts));
        assert!(!is_noise("Dies ist ein vollständiger Satz.", &opts));
    }

    #[test]
    fn keyword_fragments_are_noise() {
        let opts = Options::default();
        assert!(is_noise("Jetzt unseren Newsletter abonnieren", &opts));
        assert!(is_noise("Nächster Artikel in dieser Serie", &opts));
    }

    #[test]
    fn email_and_url_fragments_are_noise() {
        let opts = Options::default();
        assert!(is_noise("Schreiben Sie an leserbriefe@beispiel.de bitte", &opts));
        assert!(is_noise("Mehr unter https://beispiel.de/artikel finden", &opts));
        assert!(is_noise("www.beispiel.de bietet weitere Informationen", &opts));
    }

    #[test]
    fn symbol_runs_are_noise() {
        let opts = Options::default();
        assert!(is_noise("-----------", &opts));
        assert!(is_noise("** 1 ** 2 ** 3 ** 4 **", &opts));
    }

    #[test]
    fn keyword_override_spares_long_paragraphs() {
        let opts = Options::default();
        let short = "Die Anzeige im Lokalteil sorgte für Ärger";
        assert!(short.chars().count() < opts.keyword_override_len);
        assert!(is_block_noise(short, &opts));

        let long = "Die Anzeige im Lokalteil sorgte für Ärger, weil der Gemeinderat \
                    sie ohne Ausschreibung in Auftrag gegeben hatte und nun Fragen beantworten muss.";
        assert!(long.chars().count() >= opts.keyword_override_len);
        assert!(!is_block_noise(long, &opts));
        // The plain classifier still rejects it.
        assert!(is_noise(long, &opts));
    }

    #[test]
    fn block_checks_keep_short_sentences() {
        let opts = Options::default();
        // The standalone classifier calls these too short; the block
        // checks have no length floor or letter-ratio rule.
        assert!(is_noise("Er kam.", &opts));
        assert!(!is_block_noise("Er kam.", &opts));
        assert!(!is_block_noise("1:0 (0:0)", &opts));
        // Email and URL checks still apply to blocks.
        assert!(is_block_noise("kontakt@beispiel.de", &opts));
        assert!(is_block_noise("www.beispiel.de hat mehr", &opts));
    }

    #[test]
    fn override_boundary_is_inclusive() {
        let opts = Options::default();
        // Exactly 80 chars including one keyword: kept by the block variant.
        let base = "Werbung prägte die Debatte im Stadtrat über die neuen Regeln für Plakate am Ring";
        assert_eq!(base.chars().count(), 80);
        assert!(!is_block_noise(base, &opts));

        let one_less: String = base.chars().take(79).collect();
        assert!(is_block_noise(&one_less, &opts));
    }
}
