//! Bookmark-label match patterns.
//!
//! Compiles a ([`MatchMode`], search text) pair into a [`LabelPattern`]
//! that is tested against each of a page's bookmark labels.

use regex::Regex;

/// Policy for comparing a page's bookmark labels against a search text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchMode {
    /// No label filtering; every page passes.
    #[default]
    DontMatch,
    /// Pass pages that carry at least one label.
    MatchAny,
    /// Pass pages with a label equal to the search text.
    Equals,
    /// Pass pages with a label containing the search text.
    Contains,
    /// Pass pages with a label that is not exactly the search text.
    NotEqual,
    /// Pass pages with a label the search text does not occur in.
    DoesNotContain,
}

/// A compiled label-matching rule.
///
/// The regex engine has no look-around, so negation is carried in the
/// variant rather than in the pattern text. The two negated forms are
/// distinct and stay that way: [`NegatedExact`](Self::NegatedExact)
/// rejects only a whole-label match, while
/// [`NegatedSubstring`](Self::NegatedSubstring) rejects an occurrence
/// anywhere in the label.
#[derive(Debug, Clone)]
pub enum LabelPattern {
    /// Unanchored substring match (`Contains`).
    Substring(Regex),
    /// Whole-label match, `^…$` (`Equals`).
    Exact(Regex),
    /// Passes labels the search text occurs nowhere in (`DoesNotContain`).
    NegatedSubstring(Regex),
    /// Passes labels that do not equal the search text (`NotEqual`).
    NegatedExact(Regex),
}

impl LabelPattern {
    /// Compile the pattern for `mode` over `text`.
    ///
    /// Returns `None` when `text` is empty, when the mode does no text
    /// matching (`DontMatch`, `MatchAny`), or when the pattern fails to
    /// compile; the caller treats all three as "no match".
    pub fn compile(mode: MatchMode, text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        let fragment = literal_fragment(text);
        match mode {
            MatchMode::Contains => Regex::new(&fragment).ok().map(Self::Substring),
            MatchMode::Equals => Regex::new(&format!("^{fragment}$")).ok().map(Self::Exact),
            MatchMode::DoesNotContain => Regex::new(&fragment).ok().map(Self::NegatedSubstring),
            MatchMode::NotEqual => Regex::new(&format!("^{fragment}$"))
                .ok()
                .map(Self::NegatedExact),
            MatchMode::DontMatch | MatchMode::MatchAny => None,
        }
    }

    /// Test one label against the pattern.
    pub fn matches(&self, label: &str) -> bool {
        match self {
            LabelPattern::Substring(re) | LabelPattern::Exact(re) => re.is_match(label),
            LabelPattern::NegatedSubstring(re) | LabelPattern::NegatedExact(re) => {
                !re.is_match(label)
            }
        }
    }
}

/// Build a regex fragment matching `text` verbatim: alphanumeric
/// characters pass through, every other character is escaped.
fn literal_fragment(text: &str) -> String {
    let mut buf = [0u8; 4];
    let mut fragment = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            fragment.push(c);
        } else {
            fragment.push_str(&regex::escape(c.encode_utf8(&mut buf)));
        }
    }
    fragment
}
