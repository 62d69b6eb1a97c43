//! Error types for the lopdf metadata source.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Error type for [`LopdfSource`](crate::LopdfSource) operations.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Error parsing PDF structure or resolving objects.
    #[error("PDF parse error: {0}")]
    Parse(String),

    /// Error reading the document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is encrypted; encrypted files are not supported.
    #[error("PDF is encrypted")]
    Encrypted,

    /// A page number outside `1..=page_count` was queried.
    #[error("page {page} out of range (document has {count} pages)")]
    PageOutOfRange {
        /// The queried 1-based page number.
        page: usize,
        /// The document's page count.
        count: usize,
    },
}
