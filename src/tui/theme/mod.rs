mod palette;

use ratatui::prelude::*;

use druidic_core::Script;

pub use palette::Palette;

pub struct Theme {
    pub palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    pub fn new() -> Self {
        Self {
            palette: Palette::new(),
        }
    }

    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.palette.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.border_default)
        }
    }

    pub fn panel_title(&self, title: &str, focused: bool) -> Line<'_> {
        let style = if focused {
            Style::default()
                .fg(self.palette.accent_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.text_muted)
        };
        Line::styled(format!(" {} ", title), style)
    }

    pub fn script_badge(&self, script: Script) -> Style {
        let bg = match script {
            Script::ElderFuthark => self.palette.bg_badge_futhark,
            Script::Tengwar => self.palette.bg_badge_tengwar,
        };
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_primary(&self) -> Style {
        Style::default().fg(self.palette.text_primary)
    }

    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    // Hints, labels, placeholders
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    pub fn selection(&self) -> Style {
        Style::default()
            .fg(self.palette.selection_fg)
            .bg(self.palette.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn glyph_output(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_glyph)
            .add_modifier(Modifier::BOLD)
    }

    pub fn legend_glyph(&self) -> Style {
        Style::default().fg(self.palette.accent_glyph)
    }

    pub fn legend_hint(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    // The key part of a hint like "Tab"
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn confirm_prompt(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_danger)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_message(&self) -> Style {
        Style::default().fg(self.palette.accent_warning)
    }
}

/// Global theme instance
pub static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::new)
}
