use std::fmt;

use serde::Serialize;

/// One glyph and the Latin letters it stands for, e.g. `ᛊ` for "S/X".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    glyph: &'static str,
    latin_hint: &'static str,
}

impl LegendEntry {
    pub const fn new(glyph: &'static str, latin_hint: &'static str) -> Self {
        Self { glyph, latin_hint }
    }

    pub fn glyph(&self) -> &'static str {
        self.glyph
    }

    pub fn latin_hint(&self) -> &'static str {
        self.latin_hint
    }

    /// The letter groups in the hint ("K/C/Q" -> "K", "C", "Q")
    pub fn letters(&self) -> impl Iterator<Item = &'static str> {
        self.latin_hint.split('/')
    }
}

impl fmt::Display for LegendEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph, self.latin_hint)
    }
}
