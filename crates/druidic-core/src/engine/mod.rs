// Druidic Engine Module
// Per-script transliteration strategies behind one trait

pub mod futhark;
pub mod tengwar;

use crate::{LegendEntry, Script, TransliterationRequest, TransliterationResult};

pub use futhark::{FutharkEngine, WordSeparator};
pub use tengwar::{classify, TengwarEngine, Token};

/// A transliteration strategy for one script.
///
/// Implementations are total: every input string has an output string, and
/// characters the script has no glyph for are dropped rather than reported.
/// Engines hold no per-call state, so one instance can serve concurrent
/// callers.
pub trait Transliterator: Send + Sync {
    /// The script this engine writes
    fn script(&self) -> Script;

    fn transliterate(&self, request: &TransliterationRequest) -> TransliterationResult;

    /// Fixed glyph -> Latin hint table shown next to the output
    fn legend(&self) -> &'static [LegendEntry];
}

/// Case fold used by every engine; the tables only carry lowercase ASCII keys.
pub(crate) fn fold_case(text: &str) -> String {
    text.to_ascii_lowercase()
}
