// Tengwar Engine
// English mode, Tengwar Annatar keyboard encoding
//
// Glyphs are the keyboard characters the Annatar font draws the tengwar on,
// not phonetic Latin letters. Vowels are tehtar: diacritics written on the
// preceding tengwa, so a consonant is held back until we know whether a vowel
// follows it. A vowel with nothing to sit on goes on the short carrier.

use std::collections::HashMap;
use std::sync::LazyLock;

use smallvec::{smallvec, SmallVec};

use super::{fold_case, Transliterator};
use crate::{LegendEntry, Script, TransliterationRequest, TransliterationResult};

/// Carrier for a tehta with no preceding consonant
pub const SHORT_CARRIER: &str = "`";

/// Written after a tengwa to mark it as doubled
pub const DOUBLING_MARK: &str = "~";

const TEHTAR: [(char, &str); 5] = [('a', "#"), ('e', "$"), ('i', "%"), ('o', "^"), ('u', "&")];

const DIGRAPHS: [([char; 2], &str); 8] = [
    (['t', 'h'], "3"),  // sule
    (['q', 'u'], "zz"), // quesse
    (['w', 'h'], "Q"),  // hwesta
    (['c', 'h'], "a"),  // calma
    (['s', 'h'], "u"),  // harma
    (['p', 'h'], "e"),  // formen
    (['n', 'g'], "g"),  // nwalme
    (['c', 'k'], "z"),  // quesse
];

const CONSONANTS: [(char, &str); 20] = [
    ('t', "1"),  // tinco
    ('p', "q"),  // parma
    ('c', "a"),  // calma
    ('k', "z"),  // quesse
    ('d', "2"),  // ando
    ('b', "w"),  // umbar
    ('g', "s"),  // ungwe
    ('f', "e"),  // formen
    ('v', "r"),  // ampa
    ('n', "5"),  // numen
    ('m', "t"),  // malta
    ('r', "6"),  // ore
    ('l', "j"),  // lambe
    ('s', "8"),  // silme
    ('z', "i"),  // esse
    ('h', "9"),  // hyarmen
    ('w', "n"),  // vala
    ('y', "h"),  // anna
    ('q', "z"),  // -> quesse
    ('x', "8z"), // silme + quesse
];

static TEHTA_TABLE: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| TEHTAR.into_iter().collect());

static DIGRAPH_TABLE: LazyLock<HashMap<[char; 2], &'static str>> =
    LazyLock::new(|| DIGRAPHS.into_iter().collect());

static CONSONANT_TABLE: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| CONSONANTS.into_iter().collect());

static LEGEND: [LegendEntry; 22] = [
    LegendEntry::new("1", "T"),
    LegendEntry::new("q", "P"),
    LegendEntry::new("a", "CH"),
    LegendEntry::new("z", "K/C/Q"),
    LegendEntry::new("2", "D"),
    LegendEntry::new("w", "B"),
    LegendEntry::new("s", "G"),
    LegendEntry::new("3", "TH"),
    LegendEntry::new("e", "F/PH"),
    LegendEntry::new("u", "SH"),
    LegendEntry::new("r", "V"),
    LegendEntry::new("5", "N"),
    LegendEntry::new("t", "M"),
    LegendEntry::new("g", "NG"),
    LegendEntry::new("6", "R"),
    LegendEntry::new("j", "L"),
    LegendEntry::new("8", "S"),
    LegendEntry::new("i", "Z"),
    LegendEntry::new("9", "H"),
    LegendEntry::new("n", "W"),
    LegendEntry::new("h", "Y"),
    LegendEntry::new("Q", "WH"),
];

/// What the scanner recognises at one cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Space,
    Newline,
    /// Two letters written as one tengwa
    Digraph(&'static str),
    /// A repeated consonant; carries the single consonant's glyph
    Doubled(&'static str),
    /// A tehta
    Vowel(&'static str),
    Consonant(&'static str),
    Unmapped,
}

impl Token {
    /// Number of input scalars the token consumes
    pub fn width(self) -> usize {
        match self {
            Token::Digraph(_) | Token::Doubled(_) => 2,
            _ => 1,
        }
    }
}

/// Classify the scalar at the cursor, given the one after it.
///
/// Rules are tried in a fixed order: whitespace, digraph, doubled consonant,
/// vowel, single consonant. A digraph always wins over doubling, and only
/// consonants double: "aa" is two vowels.
pub fn classify(current: char, next: Option<char>) -> Token {
    match current {
        ' ' => return Token::Space,
        '\n' => return Token::Newline,
        _ => {}
    }

    if let Some(next) = next {
        if let Some(glyph) = DIGRAPH_TABLE.get(&[current, next]).copied() {
            return Token::Digraph(glyph);
        }
        if current == next {
            if let Some(glyph) = CONSONANT_TABLE.get(&current).copied() {
                return Token::Doubled(glyph);
            }
        }
    }

    if let Some(tehta) = TEHTA_TABLE.get(&current).copied() {
        return Token::Vowel(tehta);
    }
    if let Some(glyph) = CONSONANT_TABLE.get(&current).copied() {
        return Token::Consonant(glyph);
    }
    Token::Unmapped
}

/// At most a tengwa plus its doubling mark; `x` is a two-glyph cluster.
type GlyphRun = SmallVec<[&'static str; 2]>;

#[derive(Debug, Default)]
enum ScanState {
    #[default]
    Idle,
    /// A consonant waiting to see whether a tehta lands on it
    Pending(GlyphRun),
}

#[derive(Debug)]
struct Scanner {
    output: String,
    state: ScanState,
}

impl Scanner {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
            state: ScanState::Idle,
        }
    }

    fn flush(&mut self) {
        if let ScanState::Pending(run) = std::mem::take(&mut self.state) {
            self.output.extend(run);
        }
    }

    fn hold(&mut self, run: GlyphRun) {
        self.flush();
        self.state = ScanState::Pending(run);
    }

    fn attach(&mut self, tehta: &'static str) {
        match std::mem::take(&mut self.state) {
            ScanState::Idle => self.output.push_str(SHORT_CARRIER),
            ScanState::Pending(run) => self.output.extend(run),
        }
        self.output.push_str(tehta);
    }

    fn feed(&mut self, token: Token) {
        match token {
            Token::Space => {
                self.flush();
                self.output.push(' ');
            }
            Token::Newline => {
                self.flush();
                self.output.push('\n');
            }
            Token::Digraph(glyph) => self.hold(smallvec![glyph]),
            Token::Doubled(glyph) => self.hold(smallvec![glyph, DOUBLING_MARK]),
            Token::Vowel(tehta) => self.attach(tehta),
            Token::Consonant(glyph) => self.hold(smallvec![glyph]),
            // Transparent: a held consonant still takes the next vowel
            Token::Unmapped => {}
        }
    }

    fn finish(mut self) -> String {
        self.flush();
        self.output
    }
}

/// Tengwar transliterator. The scan state lives in a per-call [`Scanner`],
/// so the engine itself is stateless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TengwarEngine;

impl TengwarEngine {
    pub const fn new() -> Self {
        Self
    }

    /// Tehta for a lowercase vowel
    pub fn tehta_for(ch: char) -> Option<&'static str> {
        TEHTA_TABLE.get(&ch).copied()
    }

    /// Tengwa for a lowercase consonant
    pub fn consonant_for(ch: char) -> Option<&'static str> {
        CONSONANT_TABLE.get(&ch).copied()
    }

    /// Tengwa for a two-letter sequence
    pub fn digraph_for(first: char, second: char) -> Option<&'static str> {
        DIGRAPH_TABLE.get(&[first, second]).copied()
    }
}

impl Transliterator for TengwarEngine {
    fn script(&self) -> Script {
        Script::Tengwar
    }

    fn transliterate(&self, request: &TransliterationRequest) -> TransliterationResult {
        let input = request.raw_text();
        if request.is_blank() {
            return TransliterationResult::empty(input, Script::Tengwar);
        }

        let chars: Vec<char> = fold_case(input).chars().collect();
        let mut scanner = Scanner::with_capacity(chars.len() * 2);
        let mut cursor = 0;

        while cursor < chars.len() {
            let token = classify(chars[cursor], chars.get(cursor + 1).copied());
            log::trace!("tengwar: {:?} at {}", token, cursor);
            scanner.feed(token);
            cursor += token.width();
        }

        TransliterationResult::new(input, scanner.finish(), Script::Tengwar)
    }

    fn legend(&self) -> &'static [LegendEntry] {
        &LEGEND
    }
}
