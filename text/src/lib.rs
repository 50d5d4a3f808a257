//! Small pure text helpers.
//!
//! Everything here is total over valid UTF-8: no IO, no errors, no panics.
//! Reversal comes in two granularities:
//!
//! - [`reverse_runes`] works on Unicode scalar values (`char`). Multi-byte
//!   sequences and astral-plane characters move as single units.
//! - [`reverse_graphemes`] works on extended grapheme clusters, so combining
//!   marks and ZWJ sequences stay attached to their base character.

use unicode_segmentation::UnicodeSegmentation;

/// Reverse `text` one Unicode code point at a time.
///
/// The input is borrowed and a new `String` is returned with the same
/// code points in exactly reversed order.
///
/// ```
/// assert_eq!(hello_text::reverse_runes("!oG ,olleH"), "Hello, Go!");
/// ```
#[must_use]
pub fn reverse_runes(text: &str) -> String {
    text.chars().rev().collect()
}

/// Reverse `text` one extended grapheme cluster at a time.
#[must_use]
pub fn reverse_graphemes(text: &str) -> String {
    text.graphemes(true).rev().collect()
}

/// Length of `text` in code points (not bytes).
#[must_use]
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}
