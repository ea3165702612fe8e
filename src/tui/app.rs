use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use druidic_core::registry;
use druidic_core::settings::{Settings, SettingsError};
use druidic_core::{LegendEntry, Script, TransliterationRequest, TransliterationResult};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pane {
    Input,
    Script,
    Output,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PendingAction {
    ClearInput,
}

/// On-disk shape of settings.toml, written back when the default script is saved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsDoc {
    pub general: GeneralSection,
    pub futhark: FutharkSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSection {
    pub default_script: String,
    pub max_input_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FutharkSection {
    pub word_separator: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub show_legend: bool,
}

impl SettingsDoc {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            general: GeneralSection {
                default_script: settings.default_script().identifier().to_string(),
                max_input_chars: settings.max_input_chars(),
            },
            futhark: FutharkSection {
                word_separator: settings.word_separator().to_string(),
            },
            output: OutputSection {
                show_legend: settings.show_legend(),
            },
        }
    }
}

pub struct App {
    pub focused_pane: Pane,
    pub input: String,
    pub script: Script,
    pub result: TransliterationResult,
    pub settings: Settings,
    pub settings_path: PathBuf,
    pub status: String,
    pub output_scroll: usize,
    pub confirm_prompt: Option<String>,
    pub pending_action: Option<PendingAction>,
}

impl App {
    pub fn new() -> Self {
        let settings_path = Settings::default_path().unwrap_or_else(|| {
            log::warn!("No config directory, saving settings under the working directory");
            PathBuf::from("druidic").join("settings.toml")
        });
        Self::load(settings_path)
    }

    /// Start from the settings file at `settings_path`; an unreadable or
    /// malformed file leaves the defaults in place
    pub fn load(settings_path: PathBuf) -> Self {
        match load_settings(&settings_path) {
            Ok(settings) => Self::with_settings(settings, settings_path),
            Err(err) => {
                log::warn!("Could not load settings, using defaults: {}", err);
                let mut app = Self::with_settings(Settings::new(), settings_path);
                app.set_status(format!("Settings not loaded, using defaults: {}", err));
                app
            }
        }
    }

    pub fn with_settings(settings: Settings, settings_path: PathBuf) -> Self {
        let script = settings.default_script();
        Self {
            focused_pane: Pane::Input,
            input: String::new(),
            script,
            result: TransliterationResult::empty("", script),
            settings,
            settings_path,
            status: "Ready".to_string(),
            output_scroll: 0,
            confirm_prompt: None,
            pending_action: None,
        }
    }

    pub fn legend(&self) -> &'static [LegendEntry] {
        registry::legend_for(self.script)
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.status = msg.into();
    }

    pub fn start_confirm<S: Into<String>>(&mut self, prompt: S, action: PendingAction) {
        self.confirm_prompt = Some(prompt.into());
        self.pending_action = Some(action);
    }

    pub fn clear_confirm(&mut self) {
        self.confirm_prompt = None;
        self.pending_action = None;
    }

    /// Recompute the output from the current input and script
    pub fn retransliterate(&mut self) {
        let request = TransliterationRequest::new(self.input.as_str(), self.script);
        self.result = self.settings.transliterate(&request);
    }

    pub fn input_limit_reached(&self) -> bool {
        let limit = self.settings.max_input_chars();
        limit != 0 && self.input.chars().count() >= limit
    }

    pub fn insert_char(&mut self, c: char) {
        if self.input_limit_reached() {
            self.set_status(format!(
                "Input limit reached ({} characters)",
                self.settings.max_input_chars()
            ));
            return;
        }
        self.input.push(c);
        self.retransliterate();
    }

    pub fn backspace(&mut self) {
        if self.input.pop().is_some() {
            self.retransliterate();
        }
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.output_scroll = 0;
        self.retransliterate();
        self.set_status("Input cleared");
    }

    pub fn select_script(&mut self, script: Script) {
        self.script = script;
        self.output_scroll = 0;
        self.retransliterate();
        self.set_status(format!("Script: {}", script.display_name()));
    }

    pub fn cycle_script_forward(&mut self) {
        self.select_script(self.script.next());
    }

    pub fn cycle_script_backward(&mut self) {
        self.select_script(self.script.previous());
    }

    pub fn save_default_script(&mut self) {
        let mut updated = self.settings.clone();
        updated.set_default_script(self.script);
        let doc = SettingsDoc::from_settings(&updated);
        match save_settings_atomic(&self.settings_path, &doc) {
            Ok(()) => {
                self.settings = updated;
                self.set_status(format!(
                    "Saved default script {} to {}",
                    self.script.identifier(),
                    self.settings_path.display()
                ));
            }
            Err(err) => self.set_status(format!("Save error: {}", err)),
        }
    }

    pub fn scroll_output_up(&mut self) {
        self.output_scroll = self.output_scroll.saturating_sub(1);
    }

    pub fn scroll_output_down(&mut self) {
        let lines = self.result.glyph_text().lines().count();
        if self.output_scroll + 1 < lines {
            self.output_scroll += 1;
        }
    }

    pub fn cycle_pane_forward(&mut self) {
        self.focused_pane = match self.focused_pane {
            Pane::Input => Pane::Script,
            Pane::Script => Pane::Output,
            Pane::Output => Pane::Input,
        };
    }

    pub fn cycle_pane_backward(&mut self) {
        self.focused_pane = match self.focused_pane {
            Pane::Input => Pane::Output,
            Pane::Script => Pane::Input,
            Pane::Output => Pane::Script,
        };
    }
}

fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::new());
    }
    Settings::from_file(path)
}

fn save_settings_atomic(path: &Path, doc: &SettingsDoc) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let temp = path.with_extension("toml.tmp");
    let rendered =
        toml::to_string_pretty(doc).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&temp, rendered)?;
    fs::rename(&temp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::with_settings(Settings::new(), PathBuf::from("/nonexistent/settings.toml"))
    }

    #[test]
    fn test_typing_retransliterates() {
        let mut app = app();
        for c in "hello".chars() {
            app.insert_char(c);
        }
        assert_eq!(app.result.glyph_text(), "ᚺᛖᛚᛚᛟ");

        app.backspace();
        assert_eq!(app.result.glyph_text(), "ᚺᛖᛚᛚ");
    }

    #[test]
    fn test_switching_script_retransliterates() {
        let mut app = app();
        for c in "ta".chars() {
            app.insert_char(c);
        }
        app.cycle_script_forward();
        assert_eq!(app.script, Script::Tengwar);
        assert_eq!(app.result.glyph_text(), "1#");
        assert_eq!(app.legend().len(), 22);
    }

    #[test]
    fn test_input_limit() {
        let settings = Settings::from_toml("[general]\nmax_input_chars = 2\n").unwrap();
        let mut app = App::with_settings(settings, PathBuf::from("/nonexistent/settings.toml"));
        for c in "abc".chars() {
            app.insert_char(c);
        }
        assert_eq!(app.input, "ab");
        assert!(app.status.contains("Input limit"));
    }

    #[test]
    fn test_clear_input() {
        let mut app = app();
        app.insert_char('a');
        app.clear_input();
        assert!(app.input.is_empty());
        assert!(!app.result.has_content());
    }

    #[test]
    fn test_pane_cycle() {
        let mut app = app();
        app.cycle_pane_forward();
        assert_eq!(app.focused_pane, Pane::Script);
        app.cycle_pane_backward();
        app.cycle_pane_backward();
        assert_eq!(app.focused_pane, Pane::Output);
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("druidic-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_malformed_settings_fall_back_to_defaults() {
        let dir = scratch_dir("malformed");
        let path = dir.join("settings.toml");
        fs::write(&path, "[general\n").unwrap();

        let app = App::load(path.clone());
        assert_eq!(app.script, Script::ElderFuthark);
        assert_eq!(app.settings.max_input_chars(), Settings::new().max_input_chars());
        assert_eq!(app.settings_path, path);
        assert!(app.status.contains("using defaults"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_settings_file_is_not_an_error() {
        let app = App::load(PathBuf::from("/nonexistent/druidic/settings.toml"));
        assert_eq!(app.status, "Ready");
        assert_eq!(app.script, Script::ElderFuthark);
    }

    #[test]
    fn test_load_reads_default_script() {
        let dir = scratch_dir("load");
        let path = dir.join("settings.toml");
        fs::write(&path, "[general]\ndefault_script = \"TENGWAR\"\n").unwrap();

        assert_eq!(App::load(path).script, Script::Tengwar);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_failed_save_keeps_previous_default() {
        let dir = scratch_dir("failed-save");
        // A regular file where the settings directory should be
        let blocker = dir.join("blocker");
        fs::write(&blocker, "").unwrap();

        let mut app = App::with_settings(Settings::new(), blocker.join("settings.toml"));
        app.cycle_script_forward();
        app.save_default_script();

        assert!(app.status.starts_with("Save error"));
        assert_eq!(app.settings.default_script(), Script::ElderFuthark);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_updates_default_and_file() {
        let dir = scratch_dir("save");
        let path = dir.join("settings.toml");

        let mut app = App::with_settings(Settings::new(), path.clone());
        app.cycle_script_forward();
        app.save_default_script();

        assert_eq!(app.settings.default_script(), Script::Tengwar);
        assert_eq!(Settings::from_file(&path).unwrap().default_script(), Script::Tengwar);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_settings_doc_round_trips_through_settings() {
        let settings = Settings::from_toml(
            "[general]\ndefault_script = \"TENGWAR\"\n[futhark]\nword_separator = \"interpunct\"\n",
        )
        .unwrap();
        let rendered = toml::to_string_pretty(&SettingsDoc::from_settings(&settings)).unwrap();
        let reloaded = Settings::from_toml(&rendered).unwrap();

        assert_eq!(reloaded.default_script(), Script::Tengwar);
        assert_eq!(reloaded.word_separator(), settings.word_separator());
        assert_eq!(reloaded.max_input_chars(), settings.max_input_chars());
    }
}
