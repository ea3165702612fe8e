// Tengwar engine tests
//
// Glyphs are Tengwar Annatar keyboard characters.
// Run with: cargo test -p druidic-core --test tengwar_test

use druidic_core::engine::tengwar::{DOUBLING_MARK, SHORT_CARRIER};
use druidic_core::{Script, TengwarEngine, TransliterationRequest, TransliterationResult, Transliterator};

fn transliterate(input: &str) -> TransliterationResult {
    TengwarEngine::new().transliterate(&TransliterationRequest::new(input, Script::Tengwar))
}

fn glyphs(input: &str) -> String {
    transliterate(input).into_glyph_text()
}

#[test]
fn test_vowel_with_no_preceding_consonant_uses_short_carrier() {
    assert_eq!(glyphs("a"), "`#");
    assert!(glyphs("a").starts_with(SHORT_CARRIER));
}

#[test]
fn test_vowel_after_consonant_attaches_to_consonant() {
    assert_eq!(glyphs("ta"), "1#");
}

#[test]
fn test_consecutive_vowels_each_get_carrier() {
    assert_eq!(glyphs("ae"), "`#`$");
}

#[test]
fn test_consonant_with_no_following_vowel_flushes_bare() {
    assert_eq!(glyphs("t"), "1");
}

#[test]
fn test_digraphs() {
    let cases = [
        ("th", "3"), ("ch", "a"), ("sh", "u"), ("ph", "e"),
        ("wh", "Q"), ("ng", "g"), ("ck", "z"), ("qu", "zz"),
    ];

    for (input, expected) in cases {
        assert_eq!(glyphs(input), expected, "digraph {}", input);
    }
}

#[test]
fn test_digraph_with_following_vowel() {
    assert_eq!(glyphs("the"), "3$");
}

#[test]
fn test_digraph_never_decomposes() {
    // "t" alone is 1 and "h" alone is 9; neither may appear
    let the = glyphs("the");
    assert!(!the.contains('1'));
    assert!(!the.contains('9'));
}

#[test]
fn test_doubled_consonant_uses_doubling_mark() {
    assert_eq!(glyphs("ll"), "j~");
    assert!(glyphs("ll").ends_with(DOUBLING_MARK));
}

#[test]
fn test_doubled_consonant_with_vowel() {
    assert_eq!(glyphs("all"), "`#j~");
    assert_eq!(glyphs("lle"), "j~$");
}

#[test]
fn test_doubled_vowel_does_not_trigger_doubling_mark() {
    // Both characters match but 'a' is not a consonant, so each vowel gets
    // its own short carrier
    assert_eq!(glyphs("aa"), "`#`#");
    assert!(!glyphs("aa").contains(DOUBLING_MARK));
}

#[test]
fn test_preserves_spaces() {
    assert_eq!(glyphs("ta ta"), "1# 1#");
}

#[test]
fn test_preserves_newlines() {
    assert_eq!(glyphs("ta\nta"), "1#\n1#");
}

#[test]
fn test_drops_unmapped_characters() {
    assert_eq!(glyphs("t!a"), "1#");
}

#[test]
fn test_blank_input_returns_empty() {
    assert_eq!(glyphs("   "), "");
    assert!(!transliterate(" \n ").has_content());
}

#[test]
fn test_empty_input_returns_empty() {
    assert_eq!(glyphs(""), "");
}

#[test]
fn test_handles_upper_case() {
    assert_eq!(glyphs("TA"), "1#");
    assert_eq!(glyphs("THE Hobbit"), glyphs("the hobbit"));
}

#[test]
fn test_single_consonant_mappings() {
    let cases = [
        ("t", "1"), ("p", "q"), ("d", "2"), ("b", "w"), ("g", "s"),
        ("f", "e"), ("v", "r"), ("n", "5"), ("m", "t"), ("r", "6"),
        ("l", "j"), ("s", "8"), ("z", "i"), ("h", "9"), ("w", "n"),
        ("y", "h"), ("k", "z"), ("c", "a"), ("q", "z"), ("x", "8z"),
    ];

    for (input, expected) in cases {
        assert_eq!(glyphs(input), expected, "consonant {}", input);
    }
}

#[test]
fn test_standalone_vowel_mappings() {
    let cases = [("a", "`#"), ("e", "`$"), ("i", "`%"), ("o", "`^"), ("u", "`&")];

    for (input, expected) in cases {
        assert_eq!(glyphs(input), expected, "vowel {}", input);
    }
}

#[test]
fn test_hello() {
    // h, e on h, doubled l, o on the doubled l
    assert_eq!(glyphs("hello"), "9$j~^");
}

#[test]
fn test_unmapped_only_input_is_empty() {
    for input in ["7", "!", "é", "ß", "ж"] {
        assert_eq!(glyphs(input), "", "input {:?}", input);
    }
}

#[test]
fn test_legend_length() {
    let engine = TengwarEngine::new();
    assert_eq!(engine.legend().len(), 22);
    transliterate("a whole sentence of text");
    assert_eq!(engine.legend().len(), 22);
}

#[test]
fn test_legend_lists_roots_only() {
    let legend = TengwarEngine::new().legend();
    assert!(legend.iter().all(|e| !e.glyph().contains(DOUBLING_MARK)));
    assert!(legend.iter().all(|e| e.glyph() != SHORT_CARRIER));
    assert!(legend.iter().any(|e| e.glyph() == "Q" && e.latin_hint() == "WH"));
}
