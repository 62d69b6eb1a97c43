//! Selection scenarios over the 22-page fixture document, combining
//! ranges, parity, orientation, and every bookmark match mode.

mod common;

use common::{FixtureSource, JOG_3};
use pagesieve_core::{MatchMode, Orientation, PageSelector, Parity};

fn ingested() -> PageSelector {
    let mut selector = PageSelector::new();
    selector.read_document_info(&FixtureSource);
    selector
}

#[test]
fn page_range_selection() {
    let mut selector = ingested();
    selector.set_page_ranges("1-4,7");

    assert_eq!(selector.pages().collect::<Vec<_>>(), vec![1, 2, 3, 4, 7]);

    // Stepping the cursor by hand behaves the same way.
    let mut iter = selector.pages();
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), Some(3));
    assert_eq!(iter.next(), Some(4));
    assert_eq!(iter.next(), Some(7));
    assert_eq!(iter.next(), None);
}

#[test]
fn landscape_pages() {
    let mut selector = ingested();
    selector.orientation = Some(Orientation::Landscape);

    assert_eq!(selector.pages().collect::<Vec<_>>(), vec![9]);
}

#[test]
fn portrait_pages() {
    let mut selector = ingested();
    selector.orientation = Some(Orientation::Portrait);

    let expected: Vec<usize> = (1..=22).filter(|&p| p != 9).collect();
    assert_eq!(selector.pages().collect::<Vec<_>>(), expected);
}

#[test]
fn even_pages() {
    let mut selector = ingested();
    selector.parity = Some(Parity::Even);

    let expected: Vec<usize> = (1..=22).filter(|p| p % 2 == 0).collect();
    assert_eq!(selector.pages().collect::<Vec<_>>(), expected);
}

#[test]
fn odd_pages() {
    let mut selector = ingested();
    selector.parity = Some(Parity::Odd);

    let expected: Vec<usize> = (1..=22).filter(|p| p % 2 == 1).collect();
    assert_eq!(selector.pages().collect::<Vec<_>>(), expected);
}

#[test]
fn odd_and_portrait_pages() {
    let mut selector = ingested();
    selector.parity = Some(Parity::Odd);
    selector.orientation = Some(Orientation::Portrait);

    let expected: Vec<usize> = (1..=22).filter(|&p| p % 2 == 1 && p != 9).collect();
    assert_eq!(selector.pages().collect::<Vec<_>>(), expected);
}

#[test]
fn pages_with_any_label() {
    let mut selector = ingested();
    selector.match_mode = MatchMode::MatchAny;

    assert_eq!(
        selector.pages().collect::<Vec<_>>(),
        vec![4, 8, 9, 14, 15, 22]
    );
}

#[test]
fn labels_containing_text() {
    let mut selector = ingested();
    selector.match_mode = MatchMode::Contains;
    selector.match_text = "Staple".to_string();

    assert_eq!(selector.pages().collect::<Vec<_>>(), vec![4, 8]);
}

#[test]
fn labels_not_containing_text() {
    let mut selector = ingested();
    selector.match_mode = MatchMode::DoesNotContain;
    selector.match_text = "Staple".to_string();

    // Page 4's only label contains "Staple"; page 8 also carries labels
    // that do not. Unlabeled pages are excluded because the text is
    // non-empty.
    assert_eq!(selector.pages().collect::<Vec<_>>(), vec![8, 9, 14, 15, 22]);
}

#[test]
fn labels_equal_to_text() {
    let mut selector = ingested();
    selector.match_mode = MatchMode::Equals;
    selector.match_text = JOG_3.to_string();

    assert_eq!(selector.pages().collect::<Vec<_>>(), vec![14, 22]);
}

#[test]
fn labels_not_equal_to_text() {
    let mut selector = ingested();
    selector.match_mode = MatchMode::NotEqual;
    selector.match_text = JOG_3.to_string();

    // Page 22's only label is exactly the text; page 14 also carries
    // others.
    assert_eq!(selector.pages().collect::<Vec<_>>(), vec![4, 8, 9, 14, 15]);
}

#[test]
fn even_pages_with_labels_not_equal_to_text() {
    let mut selector = ingested();
    selector.parity = Some(Parity::Even);
    selector.match_mode = MatchMode::NotEqual;
    selector.match_text = JOG_3.to_string();

    assert_eq!(selector.pages().collect::<Vec<_>>(), vec![4, 8, 14]);
}

#[test]
fn even_pages_in_range_with_labels_not_equal_to_text() {
    let mut selector = ingested();
    selector.parity = Some(Parity::Even);
    selector.match_mode = MatchMode::NotEqual;
    selector.match_text = JOG_3.to_string();
    selector.set_page_ranges("1-9");

    assert_eq!(selector.pages().collect::<Vec<_>>(), vec![4, 8]);
}

#[test]
fn labels_equal_to_text_in_range() {
    let mut selector = ingested();
    selector.match_mode = MatchMode::Equals;
    selector.match_text = JOG_3.to_string();
    selector.set_page_ranges("20-22");

    assert_eq!(selector.pages().collect::<Vec<_>>(), vec![22]);
}

#[test]
fn not_equal_with_empty_text_selects_unlabeled_pages() {
    let mut selector = ingested();
    selector.match_mode = MatchMode::NotEqual;

    let expected: Vec<usize> = (1..=22)
        .filter(|p| ![4, 8, 9, 14, 15, 22].contains(p))
        .collect();
    assert_eq!(selector.pages().collect::<Vec<_>>(), expected);
}

#[test]
fn overlapping_ranges_emit_pages_twice() {
    let mut selector = ingested();
    selector.set_page_ranges("1-3,2-4");

    assert_eq!(selector.pages().collect::<Vec<_>>(), vec![1, 2, 3, 2, 3, 4]);
}
