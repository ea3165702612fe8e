use ratatui::prelude::*;

/// Gruvbox dark inspired palette, warm tones for carved and inked glyphs
pub struct Palette {
    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accents
    pub accent_primary: Color,
    pub accent_glyph: Color,
    pub accent_warning: Color,
    pub accent_danger: Color,

    // UI
    pub border_default: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    // Script badges
    pub bg_badge_futhark: Color,
    pub bg_badge_tengwar: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text_primary: Color::Rgb(235, 219, 178),   // fg
            text_secondary: Color::Rgb(213, 196, 161), // fg2
            text_muted: Color::Rgb(146, 131, 116),     // gray

            accent_primary: Color::Rgb(250, 189, 47),  // yellow
            accent_glyph: Color::Rgb(254, 128, 25),    // orange
            accent_warning: Color::Rgb(131, 165, 152), // blue
            accent_danger: Color::Rgb(251, 73, 52),    // red

            border_default: Color::Rgb(80, 73, 69),   // bg2
            border_focused: Color::Rgb(250, 189, 47), // yellow
            selection_bg: Color::Rgb(250, 189, 47),   // yellow
            selection_fg: Color::Rgb(29, 32, 33),     // bg0_h

            bg_badge_futhark: Color::Rgb(214, 93, 14), // dark orange
            bg_badge_tengwar: Color::Rgb(104, 157, 106), // aqua
        }
    }
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }
}
