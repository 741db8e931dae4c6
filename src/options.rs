//! Configuration options for content extraction.
//!
//! Every tunable threshold in the pipeline lives here rather than as a
//! literal scattered through the stages, so boundary values can be probed
//! independently of traversal logic. The defaults reproduce the behavior
//! the heuristics were tuned on; they are policy, not structural truths.

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use artext::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     url: Some("https://example.org/article".to_string()),
///     fuzzy_window: 20,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Source URL of the document.
    ///
    /// Used only as a hint for the readability fallback tier; the core
    /// pipeline never parses it.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Minimum length (in chars, after trimming) for a fragment to count
    /// as content. Anything shorter is classified as noise.
    ///
    /// Default: `10`
    pub min_fragment_len: usize,

    /// Length (in chars) at which a keyword match no longer rejects a
    /// fragment. Long paragraphs that happen to mention a noise keyword
    /// are usually real content.
    ///
    /// Default: `80`
    pub keyword_override_len: usize,

    /// If the joined output of the primary pass is shorter than this
    /// (chars), a looser document-wide paragraph sweep runs afterwards.
    ///
    /// Default: `80`
    pub short_result_len: usize,

    /// How many of the most recently accepted fragments are compared
    /// against for near-duplicate rejection.
    ///
    /// Default: `15`
    pub fuzzy_window: usize,

    /// Similarity ratio above which a fragment is rejected as a
    /// near-duplicate of a recently accepted one.
    ///
    /// Default: `0.95`
    pub fuzzy_threshold: f64,

    /// Minimum length (in chars) for the readability fallback tier's
    /// output to be accepted.
    ///
    /// Default: `50`
    pub min_fallback_len: usize,

    /// Minimum word count for a paragraph to be kept by the minimal
    /// last-resort scrape.
    ///
    /// Default: `3`
    pub min_fallback_words: usize,

    /// Use the readability fallback tier when the DOM heuristic fails.
    ///
    /// Requires the `readability` feature flag.
    ///
    /// Default: `true`
    pub use_readability_fallback: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            min_fragment_len: 10,
            keyword_override_len: 80,
            short_result_len: 80,
            fuzzy_window: 15,
            fuzzy_threshold: 0.95,
            min_fallback_len: 50,
            min_fallback_words: 3,
            use_readability_fallback: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let opts = Options::default();

        assert!(opts.url.is_none());
        assert_eq!(opts.min_fragment_len, 10);
        assert_eq!(opts.keyword_override_len, 80);
        assert_eq!(opts.short_result_len, 80);
        assert_eq!(opts.fuzzy_window, 15);
        assert!((opts.fuzzy_threshold - 0.95).abs() < f64::EPSILON);
        assert_eq!(opts.min_fallback_len, 50);
        assert_eq!(opts.min_fallback_words, 3);
        assert!(opts.use_readability_fallback);
    }

    #[test]
    fn test_custom_thresholds() {
        let opts = Options {
            min_fragment_len: 5,
            fuzzy_window: 30,
            use_readability_fallback: false,
            ..Options::default()
        };

        assert_eq!(opts.min_fragment_len, 5);
        assert_eq!(opts.fuzzy_window, 30);
        assert!(!opts.use_readability_fallback);
    }
}
