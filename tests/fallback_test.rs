//! Behavior of the readability and minimal fallback tiers.

use artext::extractor::fallback;
use artext::{extract_with_options, Options};

fn minimal_only() -> Options {
    Options {
        use_readability_fallback: false,
        ..Options::default()
    }
}

#[test]
fn minimal_tier_scrapes_content_paragraphs() {
    // The heuristic rejects the paragraph outright (short and
    // keyword-bearing); the minimal tier only checks the word count and
    // rescues it.
    let html = r#"<html><body>
        <p>Werbung bestimmt unser Stadtbild</p>
    </body></html>"#;

    let result = extract_with_options(html, &minimal_only());
    assert_eq!(result.as_deref(), Some("Werbung bestimmt unser Stadtbild"));
}

#[test]
fn minimal_tier_uses_meta_description() {
    let html = r#"<html><head>
        <meta name="description" content="Beschreibung des Artikels aus den Metadaten.">
        </head><body></body></html>"#;

    let result = extract_with_options(html, &minimal_only());
    assert_eq!(
        result.as_deref(),
        Some("Beschreibung des Artikels aus den Metadaten.")
    );
}

#[test]
fn minimal_tier_uses_og_description() {
    let html = r#"<html><head>
        <meta property="og:description" content="Beschreibung aus den Open-Graph-Daten.">
        </head><body></body></html>"#;

    let result = extract_with_options(html, &minimal_only());
    assert_eq!(result.as_deref(), Some("Beschreibung aus den Open-Graph-Daten."));
}

#[test]
fn minimal_tier_uses_title_as_last_resort() {
    let html = "<html><head><title>Der Seitentitel</title></head><body></body></html>";
    let result = extract_with_options(html, &minimal_only());
    assert_eq!(result.as_deref(), Some("Der Seitentitel"));
}

#[test]
fn minimal_tier_skips_two_word_paragraphs() {
    // The keyword keeps the paragraph out of the heuristic tier, and two
    // words are below the minimal tier's word floor; nothing else exists.
    let html = "<body><p>Werbung nervt</p></body>";
    assert_eq!(extract_with_options(html, &minimal_only()), None);
}

#[cfg(feature = "readability")]
#[test]
fn readability_tier_extracts_substantial_articles() {
    let html = r#"<html><head><title>Bericht</title></head><body>
        <div id="page">
            <table><tr><td>
                <p>Die Vorbereitungen für das Stadtfest laufen seit Wochen auf Hochtouren,
                denn erstmals werden mehr als zwanzigtausend Gäste erwartet.</p>
                <p>Die Organisatoren haben zusätzliche Busse bestellt und die Innenstadt
                wird für den gesamten Samstag komplett gesperrt.</p>
                <p>Händler aus der ganzen Region haben ihre Stände angemeldet und der
                Veranstalter rechnet mit einem neuen Besucherrekord.</p>
            </td></tr></table>
        </div>
    </body></html>"#;

    let result = fallback::readability(html, &Options::default());
    let text = result.unwrap();
    assert!(text.contains("Stadtfest"));
    assert!(text.chars().count() > 50);
}

#[cfg(feature = "readability")]
#[test]
fn readability_errors_are_treated_as_absent() {
    assert_eq!(fallback::readability("", &Options::default()), None);
}
