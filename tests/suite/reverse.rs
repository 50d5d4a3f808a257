//! Public reversal API tests

use hello_text::{char_count, reverse_graphemes, reverse_runes};

#[test]
fn reverse_is_total_on_edge_inputs() {
    assert_eq!(reverse_runes(""), "");
    assert_eq!(reverse_runes("a"), "a");
    assert_eq!(reverse_runes("ab"), "ba");
}

#[test]
fn surrogate_pair_chars_survive_double_reversal() {
    // U+1D11E and U+1F600 both need surrogate pairs in UTF-16.
    let input = "a\u{1D11E}b\u{1F600}";
    let reversed = reverse_runes(input);
    assert_eq!(reversed, "\u{1F600}b\u{1D11E}a");
    assert!(reversed.contains('\u{1F600}'));
    assert_eq!(reverse_runes(&reversed), input);
}

#[test]
fn reversal_preserves_code_point_count() {
    for input in ["", "x", "Hello, Go!", "日本語", "e\u{301}", "👍🏽"] {
        assert_eq!(char_count(&reverse_runes(input)), char_count(input));
    }
}

#[test]
fn grapheme_reversal_keeps_skin_tone_modifier() {
    assert_eq!(reverse_graphemes("a👍🏽"), "👍🏽a");
    assert_eq!(reverse_runes("a👍🏽"), "🏽👍a");
}
