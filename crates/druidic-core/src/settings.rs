// Druidic Settings Module
// User-configurable defaults for the command-line and terminal front ends

#![cfg(feature = "settings")]

use std::path::{Path, PathBuf};

use crate::engine::{FutharkEngine, Transliterator, WordSeparator};
use crate::{registry, Script, TransliterationRequest, TransliterationResult};

/// Input limit applied when the settings file does not set one
pub const DEFAULT_MAX_INPUT_CHARS: usize = 500;

/// Settings for the druidic front ends
///
/// These settings are loaded from a TOML file (default:
/// ~/.config/druidic/settings.toml). Every field is optional in the file.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Script used when no selector is given
    default_script: Script,

    /// Longest input, in Unicode scalars, passed to an engine (0 = no limit)
    max_input_chars: usize,

    /// How Elder Futhark writes spaces between words
    word_separator: WordSeparator,

    /// Print the legend after the output
    show_legend: bool,

    /// Path to the settings file (for reload)
    source_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
struct SettingsToml {
    #[serde(default)]
    general: Option<GeneralSettings>,

    #[serde(default)]
    futhark: Option<FutharkSettings>,

    #[serde(default)]
    output: Option<OutputSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct GeneralSettings {
    #[serde(default)]
    default_script: Option<String>,
    #[serde(default)]
    max_input_chars: Option<toml::Value>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct FutharkSettings {
    #[serde(default)]
    word_separator: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct OutputSettings {
    #[serde(default)]
    show_legend: Option<toml::Value>,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            default_script: Script::default(),
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            word_separator: WordSeparator::default(),
            show_legend: false,
            source_path: None,
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        log::debug!("loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(general) = toml_settings.general {
            // An unknown script is not an error; it falls back like any selector
            if let Some(selector) = general.default_script {
                settings.default_script = registry::resolve(&selector);
            }
            if let Some(limit) = general.max_input_chars {
                settings.max_input_chars = parse_limit_value(&limit)?;
            }
        }

        if let Some(futhark) = toml_settings.futhark {
            if let Some(separator) = futhark.word_separator {
                settings.word_separator = separator.trim().parse().map_err(|_| {
                    SettingsError::InvalidValue(format!(
                        "Unknown word separator '{}' (expected \"space\" or \"interpunct\")",
                        separator
                    ))
                })?;
            }
        }

        if let Some(output) = toml_settings.output {
            if let Some(show_legend) = output.show_legend {
                settings.show_legend = parse_bool_value(&show_legend)?;
            }
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("druidic").join("settings.toml"))
    }

    /// Load from default location (~/.config/druidic/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        Ok(Self::new())
    }

    pub fn default_script(&self) -> Script {
        self.default_script
    }

    pub fn set_default_script(&mut self, script: Script) {
        self.default_script = script;
    }

    pub fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }

    pub fn word_separator(&self) -> WordSeparator {
        self.word_separator
    }

    pub fn show_legend(&self) -> bool {
        self.show_legend
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Elder Futhark engine using the configured word separator
    pub fn futhark_engine(&self) -> FutharkEngine {
        FutharkEngine::with_separator(self.word_separator)
    }

    /// Run a request through the engine for its script, with the configured
    /// Elder Futhark word separator
    pub fn transliterate(&self, request: &TransliterationRequest) -> TransliterationResult {
        match request.script() {
            Script::ElderFuthark => self.futhark_engine().transliterate(request),
            script => registry::engine_for(script).transliterate(request),
        }
    }

    /// Apply the input limit to a request
    pub fn limit_request(&self, request: TransliterationRequest) -> TransliterationRequest {
        if self.max_input_chars == 0 {
            return request;
        }
        let count = request.char_count();
        if count > self.max_input_chars {
            log::warn!(
                "input is {} characters, truncating to {}",
                count,
                self.max_input_chars
            );
            return request.truncated(self.max_input_chars);
        }
        request
    }

    /// Reload settings from the original file
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        if let Some(ref path) = self.source_path {
            let new_settings = Self::from_file(path)?;
            *self = new_settings;
            Ok(())
        } else {
            Err(SettingsError::InvalidValue("No source path set".to_string()))
        }
    }
}

/// Parse a TOML value as a boolean
fn parse_bool_value(value: &toml::Value) -> Result<bool, SettingsError> {
    match value {
        toml::Value::Boolean(b) => Ok(*b),
        toml::Value::Integer(1) => Ok(true),
        toml::Value::Integer(0) => Ok(false),
        toml::Value::String(s) => match s.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(SettingsError::InvalidValue(format!(
                "Cannot convert '{}' to boolean",
                s
            ))),
        },
        _ => Err(SettingsError::InvalidValue(format!(
            "Cannot convert {:?} to boolean",
            value
        ))),
    }
}

/// Parse a TOML value as a non-negative character count
fn parse_limit_value(value: &toml::Value) -> Result<usize, SettingsError> {
    match value {
        toml::Value::Integer(n) => usize::try_from(*n).map_err(|_| {
            SettingsError::InvalidValue(format!("Input limit must not be negative: {}", n))
        }),
        toml::Value::String(s) => s.trim().parse::<usize>().map_err(|_| {
            SettingsError::InvalidValue(format!("Cannot convert '{}' to an input limit", s))
        }),
        _ => Err(SettingsError::InvalidValue(format!(
            "Cannot convert {:?} to an input limit",
            value
        ))),
    }
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Druidic Settings
# Place this file at: ~/.config/druidic/settings.toml

[general]
# Script used when none is selected: "ELDER_FUTHARK" or "TENGWAR"
default_script = "ELDER_FUTHARK"
# Longest input passed to an engine, in characters (0 = no limit)
max_input_chars = 500

[futhark]
# Word separator: "space" or "interpunct" (the runic mark between words)
word_separator = "space"

[output]
# Print the glyph legend after the output
show_legend = false
"#
}
