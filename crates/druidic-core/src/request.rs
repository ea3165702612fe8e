// Druidic Request/Result Values
// Transient values passed between a caller and an engine for one transliteration

use std::fmt;

use serde::Serialize;

use crate::registry;
use crate::Script;

/// Text submitted for transliteration together with the target script.
///
/// Construction never fails: a missing text becomes the empty string and a
/// missing or unknown selector becomes the default script.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TransliterationRequest {
    raw_text: String,
    script: Script,
}

impl TransliterationRequest {
    pub fn new(raw_text: impl Into<String>, script: Script) -> Self {
        Self {
            raw_text: raw_text.into(),
            script,
        }
    }

    /// Build a request from optional, unvalidated parts (form fields, CLI args)
    pub fn from_parts(raw_text: Option<&str>, selector: Option<&str>) -> Self {
        Self {
            raw_text: raw_text.unwrap_or_default().to_string(),
            script: registry::resolve_opt(selector),
        }
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn script(&self) -> Script {
        self.script
    }

    /// True when the text is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.raw_text.trim().is_empty()
    }

    /// Number of Unicode scalars in the text
    pub fn char_count(&self) -> usize {
        self.raw_text.chars().count()
    }

    /// Cut the text to at most `max_chars` Unicode scalars.
    pub fn truncated(mut self, max_chars: usize) -> Self {
        if let Some((idx, _)) = self.raw_text.char_indices().nth(max_chars) {
            self.raw_text.truncate(idx);
        }
        self
    }

    /// Same text, different script
    pub fn with_script(self, script: Script) -> Self {
        Self { script, ..self }
    }
}

/// Outcome of one transliteration: the input as given and the glyph text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransliterationResult {
    original_text: String,
    glyph_text: String,
    script: Script,
}

impl TransliterationResult {
    pub fn new(
        original_text: impl Into<String>,
        glyph_text: impl Into<String>,
        script: Script,
    ) -> Self {
        Self {
            original_text: original_text.into(),
            glyph_text: glyph_text.into(),
            script,
        }
    }

    /// A result with no glyph output
    pub fn empty(original_text: impl Into<String>, script: Script) -> Self {
        Self::new(original_text, String::new(), script)
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn glyph_text(&self) -> &str {
        &self.glyph_text
    }

    pub fn script(&self) -> Script {
        self.script
    }

    /// True when the glyph text is non-empty after trimming whitespace
    pub fn has_content(&self) -> bool {
        !self.glyph_text.trim().is_empty()
    }

    pub fn into_glyph_text(self) -> String {
        self.glyph_text
    }
}

impl fmt::Display for TransliterationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glyph_text)
    }
}
