use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let display_path = app.settings_path.display().to_string();
    let path_display = if display_path.chars().count() > 45 {
        let tail: String = display_path
            .chars()
            .rev()
            .take(42)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("...{}", tail)
    } else {
        display_path
    };

    let mut spans = vec![
        Span::styled("druidic ", t.text_primary().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("[{}] ", app.script.identifier()),
            t.script_badge(app.script),
        ),
    ];
    if let Some(font) = app.script.font() {
        spans.push(Span::styled(format!("font: {} ", font), t.text_secondary()));
    }
    spans.push(Span::styled(path_display, t.text_muted()));
    spans.push(Span::raw(" "));
    spans.push(Span::styled("Esc:quit", t.key_hint()));

    let header = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);

    frame.render_widget(header, area);
}
