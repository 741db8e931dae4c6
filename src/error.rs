//! Error types for artext.
//!
//! The extraction pipeline itself is total: parsing is best-effort, absence
//! of content is `None`, and fallback-extractor failures are swallowed.
//! Errors only arise at the I/O boundary when reading a document from disk.

/// Error type for document-loading operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input document could not be read from disk.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the document that could not be read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for document-loading operations.
pub type Result<T> = std::result::Result<T, Error>;
