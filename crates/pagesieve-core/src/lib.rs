//! pagesieve-core: Backend-independent page selection engine.
//!
//! Provides the range parser, the bookmark-label match-pattern compiler,
//! the metadata-source abstraction, and the lazy page iterator used by
//! pagesieve. The crate knows nothing about document formats; a metadata
//! source is injected through [`PageMetadataSource`].

pub mod pattern;
pub mod range;
pub mod selector;
pub mod source;

pub use pattern::{LabelPattern, MatchMode};
pub use range::{PageRange, parse_ranges};
pub use selector::{Orientation, PageIter, PageSelector, Parity, Selection};
pub use source::{PageDimensions, PageMetadataSource};
