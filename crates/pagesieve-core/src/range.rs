//! Page range parsing.
//!
//! Provides [`PageRange`] and [`parse_ranges`], the tokenizer for textual
//! range specifications like `"1-10,30-46,50"`.

/// An inclusive, 1-based range of page numbers.
///
/// Bounds are signed and unclipped: the parser stores what the user wrote
/// (`"-3"` is a valid token), and bounds are clipped into
/// `[1, page_count]` lazily when a selection is iterated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRange {
    start: i64,
    end: i64,
}

impl PageRange {
    /// Create a range. Returns `None` if `start > end`.
    pub fn new(start: i64, end: i64) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Create the single-page range `[page, page]`.
    pub fn single(page: i64) -> Self {
        Self {
            start: page,
            end: page,
        }
    }

    /// First page of the range (inclusive).
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Last page of the range (inclusive).
    pub fn end(&self) -> i64 {
        self.end
    }
}

/// Parse a range specification like `"1,3-5"` into an ordered range list.
///
/// Tokens are comma-separated and trimmed. A token that parses as an
/// integer `k` yields `[k, k]`; otherwise the token is split on `-` and,
/// if the first two parts parse as integers `a` and `b` with `a <= b`, it
/// yields `[a, b]` (so `"3-5-7"` yields `[3, 5]`). Anything else is
/// dropped without error.
///
/// Output order follows input order; overlapping and out-of-order tokens
/// are kept as written. No clipping against a page count happens here.
pub fn parse_ranges(spec: &str) -> Vec<PageRange> {
    let mut ranges = Vec::new();

    for token in spec.split(',') {
        let token = token.trim();

        if let Ok(page) = token.parse::<i64>() {
            ranges.push(PageRange::single(page));
            continue;
        }

        let parts: Vec<&str> = token.split('-').collect();
        if parts.len() >= 2 {
            if let (Ok(start), Ok(end)) = (
                parts[0].trim().parse::<i64>(),
                parts[1].trim().parse::<i64>(),
            ) {
                if let Some(range) = PageRange::new(start, end) {
                    ranges.push(range);
                }
            }
        }
    }

    ranges
}
