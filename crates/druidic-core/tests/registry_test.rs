// Registry and cross-engine tests
//
// These tests drive both engines through the registry, the way a front end does:
// selector -> Script -> engine -> result (+ legend, metadata)

use std::thread;

use druidic_core::registry::{self, scripts};
use druidic_core::{Script, TransliterationRequest, Transliterator};

#[test]
fn test_selector_to_result() {
    let request = TransliterationRequest::from_parts(Some("hello"), Some("TENGWAR"));
    let result = registry::transliterate(&request);
    assert_eq!(result.script(), Script::Tengwar);
    assert_eq!(result.original_text(), "hello");
    assert!(result.has_content());
}

#[test]
fn test_invalid_selector_falls_back_to_futhark() {
    let request = TransliterationRequest::from_parts(Some("hello"), Some("INVALID"));
    let result = registry::transliterate(&request);
    assert_eq!(result.script(), Script::ElderFuthark);
    assert_eq!(result.glyph_text(), "ᚺᛖᛚᛚᛟ");
}

#[test]
fn test_engines_differ_on_same_input() {
    let futhark = registry::transliterate(&TransliterationRequest::new("hello", Script::ElderFuthark));
    let tengwar = registry::transliterate(&TransliterationRequest::new("hello", Script::Tengwar));
    assert_ne!(futhark.glyph_text(), tengwar.glyph_text());
}

#[test]
fn test_blank_input_empty_for_every_script() {
    for script in scripts() {
        for input in ["", " ", "\n", " \t\n "] {
            let result = registry::transliterate(&TransliterationRequest::new(input, script));
            assert_eq!(result.glyph_text(), "", "{} {:?}", script, input);
        }
    }
}

#[test]
fn test_case_insensitive_for_every_script() {
    for script in scripts() {
        let lower = registry::transliterate(&TransliterationRequest::new("the quick fox", script));
        let upper = registry::transliterate(&TransliterationRequest::new("THE QUICK FOX", script));
        assert_eq!(lower.glyph_text(), upper.glyph_text(), "{}", script);
    }
}

#[test]
fn test_legend_lengths() {
    assert_eq!(registry::legend_for(Script::ElderFuthark).len(), 23);
    assert_eq!(registry::legend_for(Script::Tengwar).len(), 22);
}

#[test]
fn test_metadata() {
    let futhark = registry::metadata_for(Script::ElderFuthark);
    assert_eq!(futhark.display_name, "Elder Futhark");
    assert!(futhark.description.contains("Proto-Germanic runic alphabet"));

    let tengwar = registry::metadata_for(Script::Tengwar);
    assert_eq!(tengwar.display_name, "Tengwar");
    assert!(tengwar.description.contains("Tolkien"));
}

#[test]
fn test_scripts_in_declaration_order() {
    assert_eq!(
        scripts().collect::<Vec<_>>(),
        vec![Script::ElderFuthark, Script::Tengwar]
    );
}

#[test]
fn test_engines_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let script = if i % 2 == 0 { Script::ElderFuthark } else { Script::Tengwar };
                let engine = registry::engine_for(script);
                (0..100)
                    .map(|_| {
                        engine
                            .transliterate(&TransliterationRequest::new("the hall", script))
                            .into_glyph_text()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let outputs = handle.join().unwrap();
        assert!(outputs.windows(2).all(|w| w[0] == w[1]));
    }
}

#[test]
fn test_long_input_is_linear_and_total() {
    let input = "Three Rings for the Elven-kings under the sky! ".repeat(200);
    for script in scripts() {
        let result = registry::transliterate(&TransliterationRequest::new(input.as_str(), script));
        assert!(result.has_content());
    }
}
