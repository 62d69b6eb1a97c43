//! Page selection configuration and the lazy page iterator.
//!
//! [`PageSelector`] holds the filter configuration (selection mode,
//! parity, orientation, bookmark-label match) together with the per-page
//! metadata tables built by [`PageSelector::read_document_info`].
//! [`PageSelector::pages`] returns [`PageIter`], a cursor that walks the
//! configured ranges and emits qualifying page numbers on demand.

use crate::pattern::{LabelPattern, MatchMode};
use crate::range::{PageRange, parse_ranges};
use crate::source::PageMetadataSource;

/// Parity filter: restricts candidates to even- or odd-numbered pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parity {
    Even,
    Odd,
}

/// Page orientation, derived from page dimensions at ingestion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// The universe of candidate pages: every page, or an explicit union of
/// ranges walked in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// All pages, behaving as one implicit range `[1, page_count]`.
    #[default]
    All,
    /// An ordered list of ranges; overlaps and reorderings are kept, and
    /// emitted pages follow range order, not numeric order.
    Ranges(Vec<PageRange>),
}

/// Per-page metadata tables, both indexed by `page - 1`.
#[derive(Debug, Clone)]
struct PageTables {
    orientation: Vec<Orientation>,
    /// `Some` is always a non-empty label list.
    labels: Vec<Option<Vec<String>>>,
}

/// Page selection configuration plus ingested document metadata.
///
/// Build one, point it at a document once via
/// [`read_document_info`](Self::read_document_info), then pull page
/// numbers from [`pages`](Self::pages):
///
/// ```
/// use pagesieve_core::{MatchMode, PageSelector, Parity};
///
/// let mut selector = PageSelector::new();
/// selector.set_page_ranges("1-10,30-46,50");
/// selector.parity = Some(Parity::Even);
/// selector.match_mode = MatchMode::Contains;
/// selector.match_text = "media".to_string();
/// // selector.read_document_info(&source);
/// let pages: Vec<usize> = selector.pages().collect();
/// ```
///
/// The configuration is frozen while an iterator exists: `pages()`
/// borrows the selector immutably for the iterator's lifetime.
#[derive(Debug, Clone, Default)]
pub struct PageSelector {
    /// Candidate page universe.
    pub selection: Selection,
    /// Parity filter; `None` disables it.
    pub parity: Option<Parity>,
    /// Orientation filter; `None` disables it.
    pub orientation: Option<Orientation>,
    /// Bookmark-label match policy.
    pub match_mode: MatchMode,
    /// Search text for the text-matching modes.
    pub match_text: String,
    num_pages: usize,
    tables: Option<PageTables>,
}

impl PageSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `spec` and switch the selection to the resulting ranges.
    pub fn set_page_ranges(&mut self, spec: &str) {
        self.selection = Selection::Ranges(parse_ranges(spec));
    }

    /// Page count recorded by the last ingestion.
    pub fn page_count(&self) -> usize {
        self.num_pages
    }

    /// Query the document once and build the per-page metadata tables.
    ///
    /// Any provider error aborts the pass and leaves both tables absent:
    /// the page count is kept, orientation filters then reject every page
    /// and label lookups see no labels. Errors are not surfaced. A page
    /// count of zero makes the pass a no-op.
    pub fn read_document_info<S: PageMetadataSource>(&mut self, source: &S) {
        self.tables = None;
        self.num_pages = source.page_count();
        if self.num_pages == 0 {
            return;
        }
        match build_tables(source, self.num_pages) {
            Ok(tables) => self.tables = Some(tables),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "metadata ingestion aborted; tables dropped");
            }
        }
    }

    /// Orientation of `page`, or `None` when the tables are unavailable
    /// or the page is out of range.
    pub fn page_orientation(&self, page: usize) -> Option<Orientation> {
        let tables = self.tables.as_ref()?;
        if page < 1 || page > tables.orientation.len() {
            return None;
        }
        Some(tables.orientation[page - 1])
    }

    /// Bookmark labels of `page`, or `None` when the page has none, the
    /// tables are unavailable, or the page is out of range.
    pub fn page_labels(&self, page: usize) -> Option<&[String]> {
        let tables = self.tables.as_ref()?;
        if page < 1 || page > tables.labels.len() {
            return None;
        }
        tables.labels[page - 1].as_deref()
    }

    /// Lazily iterate the page numbers satisfying the configuration.
    ///
    /// Each call returns a fresh cursor starting from the first range.
    /// The sequence is forward-only and finite; once exhausted, a cursor
    /// stays exhausted.
    pub fn pages(&self) -> PageIter<'_> {
        PageIter {
            selector: self,
            pattern: LabelPattern::compile(self.match_mode, &self.match_text),
            range_index: 0,
            current_page: 0,
            current_max: 0,
            increment: 1,
        }
    }
}

fn build_tables<S: PageMetadataSource>(
    source: &S,
    num_pages: usize,
) -> Result<PageTables, S::Error> {
    let mut orientation = Vec::with_capacity(num_pages);
    let mut labels = Vec::with_capacity(num_pages);
    for page in 1..=num_pages {
        orientation.push(source.page_dimensions(page)?.orientation());
        // Normalize an empty list to "no labels".
        labels.push(source.page_labels(page)?.filter(|l| !l.is_empty()));
    }
    Ok(PageTables {
        orientation,
        labels,
    })
}

/// Clip a raw range bound into `[1, num_pages]`.
fn clip_page(page: i64, num_pages: usize) -> usize {
    if page <= 0 {
        1
    } else if page > num_pages as i64 {
        num_pages
    } else {
        page as usize
    }
}

/// Cursor over the qualifying pages of one [`PageSelector`].
///
/// The only mutable state of a traversal: the range cursor plus the
/// current page window. Independent cursors over the same selector do not
/// interfere.
#[derive(Debug)]
pub struct PageIter<'a> {
    selector: &'a PageSelector,
    pattern: Option<LabelPattern>,
    range_index: usize,
    current_page: usize,
    current_max: usize,
    increment: usize,
}

impl PageIter<'_> {
    /// Pull the next usable range into the cursor, clipping its bounds
    /// against the page count. Returns `false` when the selection is
    /// exhausted.
    fn advance_range(&mut self) -> bool {
        let num_pages = self.selector.num_pages;
        match &self.selector.selection {
            Selection::All => {
                if self.current_page == 0 {
                    self.current_page = 1;
                    self.current_max = num_pages;
                    self.increment = 1;
                    true
                } else {
                    self.current_page < num_pages
                }
            }
            Selection::Ranges(ranges) => loop {
                let Some(range) = ranges.get(self.range_index) else {
                    return false;
                };
                self.range_index += 1;

                let start = if range.start() <= 0 {
                    1
                } else if range.start() > num_pages as i64 {
                    // The whole range lies beyond the document.
                    continue;
                } else {
                    range.start() as usize
                };
                let end = clip_page(range.end(), num_pages);
                if start > end {
                    continue;
                }

                self.current_page = start;
                self.current_max = end;
                self.increment = 1;
                return true;
            },
        }
    }

    fn qualifies(&self, page: usize) -> bool {
        self.parity_matches(page) && self.orientation_matches(page) && self.labels_match(page)
    }

    fn parity_matches(&self, page: usize) -> bool {
        match self.selector.parity {
            Some(Parity::Odd) => page % 2 == 1,
            Some(Parity::Even) => page % 2 == 0,
            None => true,
        }
    }

    fn orientation_matches(&self, page: usize) -> bool {
        match self.selector.orientation {
            // An unavailable orientation never equals a concrete filter.
            Some(wanted) => self.selector.page_orientation(page) == Some(wanted),
            None => true,
        }
    }

    fn labels_match(&self, page: usize) -> bool {
        match self.selector.match_mode {
            MatchMode::DontMatch => true,
            MatchMode::MatchAny => self.selector.page_labels(page).is_some(),
            MatchMode::Equals | MatchMode::Contains => {
                if self.selector.match_text.is_empty() {
                    return false;
                }
                match (self.selector.page_labels(page), &self.pattern) {
                    (Some(labels), Some(pattern)) => labels.iter().any(|l| pattern.matches(l)),
                    _ => false,
                }
            }
            MatchMode::NotEqual | MatchMode::DoesNotContain => {
                match self.selector.page_labels(page) {
                    None => self.selector.match_text.is_empty(),
                    Some(labels) => match &self.pattern {
                        Some(pattern) => labels.iter().any(|l| pattern.matches(l)),
                        None => false,
                    },
                }
            }
        }
    }
}

impl Iterator for PageIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.selector.num_pages == 0 {
            return None;
        }
        loop {
            // Refill the range window, or step within it.
            if self.current_page == 0 || self.current_page >= self.current_max {
                if !self.advance_range() {
                    return None;
                }
            } else {
                self.current_page += self.increment;
            }
            if self.current_page > self.current_max {
                if !self.advance_range() {
                    return None;
                }
            }

            if self.qualifies(self.current_page) {
                return Some(self.current_page);
            }
        }
    }
}
