//! pagesieve-pdf: lopdf-backed metadata source for pagesieve.
//!
//! Implements [`pagesieve_core::PageMetadataSource`] on top of
//! [lopdf](https://crates.io/crates/lopdf). Page dimensions come from the
//! CropBox (falling back to the MediaBox inherited through the page tree)
//! and bookmark labels from a single walk of the document outline tree.

pub mod error;
pub mod lopdf_source;

pub use error::SourceError;
pub use lopdf_source::LopdfSource;
pub use pagesieve_core;
