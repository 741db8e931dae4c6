//! # artext
//!
//! Heuristic extraction of article body text from noisy news-site HTML.
//!
//! The extractor strips scripts, navigation, and ad/share widgets, picks
//! the paragraph-densest content container, and walks it in document
//! order while filtering boilerplate phrases and dropping exact and
//! near-duplicate fragments. Pages the heuristic cannot handle fall back
//! to a readability pass and finally to meta description or title.
//!
//! ## Quick Start
//!
//! ```rust
//! use artext::extract;
//!
//! let html = r#"<html><body><article>
//! <p>Der Gemeinderat hat am Dienstag die neue Satzung beschlossen.</p>
//! <p>Die Regelung tritt zum ersten Januar in Kraft.</p>
//! </article></body></html>"#;
//!
//! let text = extract(html);
//! assert!(text.is_some());
//! ```
//!
//! Extraction never yields an empty string: a page without usable
//! content comes back as `None`.

mod error;
mod options;
mod patterns;
mod similarity;

/// Text normalization and fragment noise classification.
pub mod text;

/// Thin adapter over `dom_query` selections and nodes.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Tiered extraction pipeline (sanitize, container, collect, fallbacks).
pub mod extractor;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;

/// Extract article text from a UTF-8 HTML document with default options.
#[must_use]
pub fn extract(html: &str) -> Option<String> {
    extract_with_options(html, &Options::default())
}

/// Extract article text from a UTF-8 HTML document.
#[must_use]
pub fn extract_with_options(html: &str, opts: &Options) -> Option<String> {
    extractor::pipeline::run(html, opts)
}

/// Extract article text from raw bytes with default options.
///
/// The encoding is sniffed from the document's charset declaration and
/// defaults to UTF-8.
#[must_use]
pub fn extract_bytes(raw: &[u8]) -> Option<String> {
    extract_bytes_with_options(raw, &Options::default())
}

/// Extract article text from raw bytes.
#[must_use]
pub fn extract_bytes_with_options(raw: &[u8], opts: &Options) -> Option<String> {
    let html = encoding::transcode_to_utf8(raw);
    extract_with_options(&html, opts)
}

/// Read an HTML file and extract its article text.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read. A readable file
/// without usable content yields `Ok(None)`.
pub fn extract_file(path: &std::path::Path, opts: &Options) -> Result<Option<String>> {
    let raw = std::fs::read(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(extract_bytes_with_options(&raw, opts))
}
