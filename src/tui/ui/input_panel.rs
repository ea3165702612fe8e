use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::app::{App, Pane};
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let focused = app.focused_pane == Pane::Input;

    let limit = app.settings.max_input_chars();
    let count = app.input.chars().count();
    let title = if limit == 0 {
        format!("INPUT {}", count)
    } else {
        format!("INPUT {}/{}", count, limit)
    };

    let block = Block::default()
        .title(t.panel_title(&title, focused))
        .borders(Borders::ALL)
        .border_style(t.panel_border(focused))
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.input.is_empty() {
        let placeholder = Paragraph::new(Line::styled(
            "Type Latin text here to transliterate it.",
            t.text_muted(),
        ));
        frame.render_widget(placeholder, inner);
        return;
    }

    let mut lines: Vec<Line> = app
        .input
        .split('\n')
        .map(|l| Line::styled(l.to_string(), t.text_primary()))
        .collect();

    // Block cursor after the last character
    if focused {
        if let Some(last) = lines.pop() {
            let mut spans = last.spans;
            spans.push(Span::styled(" ", t.selection()));
            lines.push(Line::from(spans));
        }
    }

    // Keep the tail of the input in view
    let visible_height = inner.height as usize;
    let skip = lines.len().saturating_sub(visible_height);
    let lines: Vec<Line> = lines.into_iter().skip(skip).collect();

    let input = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(input, inner);
}
