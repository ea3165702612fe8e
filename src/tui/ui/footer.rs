use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Pane};
use crate::tui::theme::{theme, Theme};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    if let Some(prompt) = &app.confirm_prompt {
        render_confirm_prompt(frame, app, area, prompt, t);
    } else {
        render_status_and_hints(frame, app, area, t);
    }
}

fn render_confirm_prompt(frame: &mut Frame, app: &App, area: Rect, prompt: &str, t: &Theme) {
    let lines = vec![
        Line::styled(format!("Status: {}", app.status), t.status_message()),
        Line::from(vec![
            Span::styled(format!("CONFIRM: {} ", prompt), t.confirm_prompt()),
            Span::styled("[", t.text_muted()),
            Span::styled("y", t.key_hint()),
            Span::styled("/", t.text_muted()),
            Span::styled("Enter", t.key_hint()),
            Span::styled(":yes  ", t.text_muted()),
            Span::styled("[", t.text_muted()),
            Span::styled("n", t.key_hint()),
            Span::styled("/", t.text_muted()),
            Span::styled("Esc", t.key_hint()),
            Span::styled(":no]", t.text_muted()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_and_hints(frame: &mut Frame, app: &App, area: Rect, t: &Theme) {
    let line1 = Line::styled(format!("Status: {}", app.status), t.status_message());

    let pane_style = |pane: Pane| {
        if app.focused_pane == pane {
            t.key_hint()
        } else {
            t.text_muted()
        }
    };

    let mut spans = vec![
        Span::styled("Tab", t.key_hint()),
        Span::styled(":", t.text_muted()),
        Span::styled("Input", pane_style(Pane::Input)),
        Span::styled(" ", t.text_muted()),
        Span::styled("Script", pane_style(Pane::Script)),
        Span::styled(" ", t.text_muted()),
        Span::styled("Output", pane_style(Pane::Output)),
        Span::styled("  ", t.text_muted()),
    ];

    let pane_hints: &[(&str, &str)] = match app.focused_pane {
        Pane::Input => &[("Enter", ":newline  "), ("Ctrl-L", ":clear  ")],
        Pane::Script => &[("arrows", ":switch  "), ("s", ":save default  ")],
        Pane::Output => &[("arrows", ":scroll  ")],
    };
    for (key, label) in pane_hints {
        spans.push(Span::styled(*key, t.key_hint()));
        spans.push(Span::styled(*label, t.text_muted()));
    }
    spans.push(Span::styled("Esc", t.key_hint()));
    spans.push(Span::styled(":quit", t.text_muted()));

    frame.render_widget(Paragraph::new(vec![line1, Line::from(spans)]), area);
}
