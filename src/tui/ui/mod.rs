mod footer;
mod header;
mod input_panel;
mod output_panel;

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use druidic_core::Script;

use crate::tui::app::{App, Pane};

pub fn draw_ui(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(7), // Input
            Constraint::Length(4), // Script selector + description
            Constraint::Min(8),    // Glyphs and legend
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    header::render(frame, app, root[0]);
    input_panel::render(frame, app, root[1]);
    render_script_selector(frame, app, root[2]);
    output_panel::render(frame, app, root[3]);
    footer::render(frame, app, root[4]);
}

fn render_script_selector(frame: &mut Frame, app: &App, area: Rect) {
    let t = crate::tui::theme::theme();
    let focused = app.focused_pane == Pane::Script;

    let block = Block::default()
        .title(t.panel_title("SCRIPT", focused))
        .borders(Borders::ALL)
        .border_style(t.panel_border(focused))
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![];
    for script in Script::all() {
        let style = if script == app.script {
            t.selection()
        } else {
            t.text_secondary()
        };
        spans.push(Span::styled(format!("[{}]", script.display_name()), style));
        spans.push(Span::raw("  "));
    }

    let lines = vec![
        Line::from(spans),
        Line::styled(app.script.description(), t.text_muted()),
    ];

    let selector = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(selector, inner);
}
