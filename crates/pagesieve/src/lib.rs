//! pagesieve: select pages from paginated documents by range, parity,
//! orientation, and bookmark-label match.
//!
//! This is the public API facade crate. It re-exports the engine from
//! pagesieve-core and the lopdf-backed metadata source from
//! pagesieve-pdf, and adds one-call helpers for the common
//! open-ingest-select flow.
//!
//! # Architecture
//!
//! - **pagesieve-core**: range parser, match-pattern compiler, metadata
//!   ingestion, and the lazy page iterator (no document-format deps)
//! - **pagesieve-pdf**: the lopdf-backed [`PageMetadataSource`]
//! - **pagesieve** (this crate): ties everything together
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), pagesieve::SourceError> {
//! use pagesieve::{MatchMode, PageSelector, Parity};
//!
//! let mut selector = PageSelector::new();
//! selector.set_page_ranges("1-10,30-46,50");
//! selector.parity = Some(Parity::Even);
//! selector.match_mode = MatchMode::Contains;
//! selector.match_text = "media".to_string();
//!
//! let pages = pagesieve::select_from_file("input.pdf", &mut selector)?;
//! println!("{pages:?}");
//! # Ok(())
//! # }
//! ```

use std::path::Path;

pub use pagesieve_core::{
    LabelPattern, MatchMode, Orientation, PageDimensions, PageIter, PageMetadataSource, PageRange,
    PageSelector, Parity, Selection, parse_ranges,
};
pub use pagesieve_pdf::{LopdfSource, SourceError};

/// Open `path`, ingest its metadata into `selector`, and collect the
/// qualifying page numbers.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed as a PDF.
/// Metadata ingestion itself never fails; see
/// [`PageSelector::read_document_info`].
pub fn select_from_file(
    path: impl AsRef<Path>,
    selector: &mut PageSelector,
) -> Result<Vec<usize>, SourceError> {
    let source = LopdfSource::open(path)?;
    selector.read_document_info(&source);
    Ok(selector.pages().collect())
}

/// Like [`select_from_file`], for an in-memory document.
///
/// # Errors
///
/// Returns an error if the bytes cannot be parsed as a PDF.
pub fn select_from_bytes(
    bytes: &[u8],
    selector: &mut PageSelector,
) -> Result<Vec<usize>, SourceError> {
    let source = LopdfSource::open_bytes(bytes)?;
    selector.read_document_info(&source);
    Ok(selector.pages().collect())
}
