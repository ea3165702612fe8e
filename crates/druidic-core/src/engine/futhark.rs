// Elder Futhark Engine
// One rune per Latin letter, looked up scalar by scalar

use std::collections::HashMap;
use std::sync::LazyLock;

use strum_macros::{Display, EnumString};

use super::{fold_case, Transliterator};
use crate::{LegendEntry, Script, TransliterationRequest, TransliterationResult};

/// Latin letter -> rune. Letters with no direct equivalent take the closest
/// phonetic rune, so several letters share a glyph.
const RUNES: [(char, &str); 26] = [
    ('a', "\u{16A8}"), // Ansuz
    ('b', "\u{16D2}"), // Berkano
    ('c', "\u{16B2}"), // Kaunan (hard c)
    ('d', "\u{16DE}"), // Dagaz
    ('e', "\u{16D6}"), // Ehwaz
    ('f', "\u{16A0}"), // Fehu
    ('g', "\u{16B7}"), // Gebo
    ('h', "\u{16BA}"), // Haglaz
    ('i', "\u{16C1}"), // Isaz
    ('j', "\u{16C3}"), // Jera
    ('k', "\u{16B2}"), // Kaunan
    ('l', "\u{16DA}"), // Laguz
    ('m', "\u{16D7}"), // Mannaz
    ('n', "\u{16BE}"), // Naudiz
    ('o', "\u{16DF}"), // Othalan
    ('p', "\u{16C8}"), // Pertho
    ('q', "\u{16B2}"), // -> Kaunan
    ('r', "\u{16B1}"), // Raidho
    ('s', "\u{16CA}"), // Sowilo
    ('t', "\u{16CF}"), // Tiwaz
    ('u', "\u{16A2}"), // Uruz
    ('v', "\u{16A2}"), // -> Uruz
    ('w', "\u{16B9}"), // Wunjo
    ('x', "\u{16CA}"), // -> Sowilo, closest sibilant
    ('y', "\u{16C3}"), // -> Jera
    ('z', "\u{16C9}"), // Algiz
];

static RUNE_TABLE: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| RUNES.into_iter().collect());

/// One entry per distinct rune, including Thurisaz and Ingwaz which have no
/// single-letter source.
static LEGEND: [LegendEntry; 23] = [
    LegendEntry::new("\u{16A0}", "F"),
    LegendEntry::new("\u{16A2}", "U/V"),
    LegendEntry::new("\u{16A6}", "TH"),
    LegendEntry::new("\u{16A8}", "A"),
    LegendEntry::new("\u{16B1}", "R"),
    LegendEntry::new("\u{16B2}", "K/C/Q"),
    LegendEntry::new("\u{16B7}", "G"),
    LegendEntry::new("\u{16B9}", "W"),
    LegendEntry::new("\u{16BA}", "H"),
    LegendEntry::new("\u{16BE}", "N"),
    LegendEntry::new("\u{16C1}", "I"),
    LegendEntry::new("\u{16C3}", "J/Y"),
    LegendEntry::new("\u{16C8}", "P"),
    LegendEntry::new("\u{16C9}", "Z"),
    LegendEntry::new("\u{16CA}", "S/X"),
    LegendEntry::new("\u{16CF}", "T"),
    LegendEntry::new("\u{16D2}", "B"),
    LegendEntry::new("\u{16D6}", "E"),
    LegendEntry::new("\u{16D7}", "M"),
    LegendEntry::new("\u{16DA}", "L"),
    LegendEntry::new("\u{16DC}", "NG"),
    LegendEntry::new("\u{16DE}", "D"),
    LegendEntry::new("\u{16DF}", "O"),
];

/// How a space between words is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WordSeparator {
    /// Plain space
    #[default]
    Space,
    /// Runic single punctuation, U+16EB
    Interpunct,
}

impl WordSeparator {
    pub fn glyph(self) -> &'static str {
        match self {
            WordSeparator::Space => " ",
            WordSeparator::Interpunct => "\u{16EB}",
        }
    }
}

/// Stateless Elder Futhark transliterator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FutharkEngine {
    separator: WordSeparator,
}

impl FutharkEngine {
    pub const fn new() -> Self {
        Self {
            separator: WordSeparator::Space,
        }
    }

    pub const fn with_separator(separator: WordSeparator) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> WordSeparator {
        self.separator
    }

    /// Rune for a lowercase Latin letter
    pub fn rune_for(ch: char) -> Option<&'static str> {
        RUNE_TABLE.get(&ch).copied()
    }
}

impl Transliterator for FutharkEngine {
    fn script(&self) -> Script {
        Script::ElderFuthark
    }

    fn transliterate(&self, request: &TransliterationRequest) -> TransliterationResult {
        let input = request.raw_text();
        if request.is_blank() {
            return TransliterationResult::empty(input, Script::ElderFuthark);
        }

        let lower = fold_case(input);
        let mut runes = String::with_capacity(lower.len() * 3);

        for ch in lower.chars() {
            match ch {
                ' ' => runes.push_str(self.separator.glyph()),
                '\n' => runes.push('\n'),
                _ => match Self::rune_for(ch) {
                    Some(rune) => runes.push_str(rune),
                    None => log::trace!("futhark: dropping unmapped {:?}", ch),
                },
            }
        }

        TransliterationResult::new(input, runes, Script::ElderFuthark)
    }

    fn legend(&self) -> &'static [LegendEntry] {
        &LEGEND
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn transliterate(input: &str) -> String {
        FutharkEngine::new()
            .transliterate(&TransliterationRequest::new(input, Script::ElderFuthark))
            .into_glyph_text()
    }

    #[test]
    fn test_table_covers_alphabet() {
        for ch in 'a'..='z' {
            assert!(FutharkEngine::rune_for(ch).is_some(), "no rune for {}", ch);
        }
        assert_eq!(FutharkEngine::rune_for('A'), None);
    }

    #[test]
    fn test_every_rune_is_in_legend() {
        let legend: HashSet<&str> = LEGEND.iter().map(|e| e.glyph()).collect();
        for (_, rune) in RUNES {
            assert!(legend.contains(rune), "rune {} missing from legend", rune);
        }
    }

    #[test]
    fn test_legend_glyphs_are_distinct() {
        let legend: HashSet<&str> = LEGEND.iter().map(|e| e.glyph()).collect();
        assert_eq!(legend.len(), LEGEND.len());
    }

    #[test]
    fn test_interpunct_separator() {
        let engine = FutharkEngine::with_separator(WordSeparator::Interpunct);
        let result =
            engine.transliterate(&TransliterationRequest::new("a b", Script::ElderFuthark));
        assert_eq!(result.glyph_text(), "\u{16A8}\u{16EB}\u{16D2}");
    }

    #[test]
    fn test_interpunct_blank_input_still_empty() {
        let engine = FutharkEngine::with_separator(WordSeparator::Interpunct);
        let result =
            engine.transliterate(&TransliterationRequest::new("   ", Script::ElderFuthark));
        assert_eq!(result.glyph_text(), "");
    }

    #[test]
    fn test_word_separator_parse() {
        assert_eq!("space".parse::<WordSeparator>(), Ok(WordSeparator::Space));
        assert_eq!(
            "Interpunct".parse::<WordSeparator>(),
            Ok(WordSeparator::Interpunct)
        );
        assert!("dot".parse::<WordSeparator>().is_err());
    }

    #[test]
    fn test_tabs_and_carriage_returns_dropped() {
        assert_eq!(transliterate("a\tb\r\n"), "\u{16A8}\u{16D2}\n");
    }
}
