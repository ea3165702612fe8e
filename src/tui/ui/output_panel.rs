use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::app::{App, Pane};
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(28)])
        .split(area);

    render_glyphs(frame, app, chunks[0]);
    render_legend(frame, app, chunks[1]);
}

fn render_glyphs(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let focused = app.focused_pane == Pane::Output;

    let block = Block::default()
        .title(t.panel_title("OUTPUT", focused))
        .borders(Borders::ALL)
        .border_style(t.panel_border(focused))
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !app.result.has_content() {
        let empty = Paragraph::new(Line::styled(
            "Nothing to show yet. Type some text in the input pane.",
            t.text_muted(),
        ));
        frame.render_widget(empty, inner);
        return;
    }

    let glyph_lines: Vec<&str> = app.result.glyph_text().split('\n').collect();
    let visible_height = inner.height as usize;
    let max_scroll = glyph_lines.len().saturating_sub(visible_height);
    let scroll = app.output_scroll.min(max_scroll);

    let mut lines: Vec<Line> = glyph_lines[scroll..]
        .iter()
        .take(visible_height)
        .map(|l| Line::styled(l.to_string(), t.glyph_output()))
        .collect();

    // Tengwar glyphs are keyboard codes until rendered in the right font
    if let Some(font) = app.script.font() {
        if lines.len() < visible_height {
            lines.push(Line::styled(
                format!("(render with {} to see the glyphs)", font),
                t.text_muted(),
            ));
        }
    }

    let output = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(output, inner);
}

fn render_legend(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let block = Block::default()
        .title(t.panel_title("LEGEND", false))
        .borders(Borders::ALL)
        .border_style(t.panel_border(false));

    let items: Vec<ListItem> = app
        .legend()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<3}", entry.glyph()), t.legend_glyph()),
                Span::raw(" "),
                Span::styled(entry.latin_hint(), t.legend_hint()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
