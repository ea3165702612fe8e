use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Pane, PendingAction};

/// Handle input and return true if the app should quit
pub fn handle_input(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    if app.confirm_prompt.is_some() {
        return handle_confirmation(app, key.code);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keys work in every pane, including while typing
    match key.code {
        KeyCode::Esc => return Ok(true),
        KeyCode::Char('c') if ctrl => return Ok(true),
        KeyCode::Char('l') if ctrl => {
            if !app.input.is_empty() {
                app.start_confirm("Clear input? (y/n)", PendingAction::ClearInput);
            }
            return Ok(false);
        }
        KeyCode::Tab => {
            app.cycle_pane_forward();
            return Ok(false);
        }
        KeyCode::BackTab => {
            app.cycle_pane_backward();
            return Ok(false);
        }
        _ => {}
    }

    // Outside the input pane letters are commands, not text
    if app.focused_pane != Pane::Input && key.code == KeyCode::Char('q') {
        return Ok(true);
    }

    match app.focused_pane {
        Pane::Input => handle_input_pane(app, key, ctrl),
        Pane::Script => handle_script_pane(app, key.code),
        Pane::Output => handle_output_pane(app, key.code),
    }

    Ok(false)
}

fn handle_confirmation(app: &mut App, key: KeyCode) -> io::Result<bool> {
    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            if let Some(action) = app.pending_action.take() {
                app.clear_confirm();
                match action {
                    PendingAction::ClearInput => app.clear_input(),
                }
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.set_status("Cancelled");
            app.clear_confirm();
        }
        _ => {}
    }
    Ok(false)
}

fn handle_input_pane(app: &mut App, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::Char(c) if !ctrl => app.insert_char(c),
        KeyCode::Enter => app.insert_char('\n'),
        KeyCode::Backspace => app.backspace(),
        _ => {}
    }
}

fn handle_script_pane(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            app.cycle_script_backward();
        }
        KeyCode::Right
        | KeyCode::Down
        | KeyCode::Char('l')
        | KeyCode::Char('j')
        | KeyCode::Enter
        | KeyCode::Char(' ') => app.cycle_script_forward(),
        KeyCode::Char('s') => app.save_default_script(),
        _ => {}
    }
}

fn handle_output_pane(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_output_up(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_output_down(),
        KeyCode::Home | KeyCode::Char('g') => app.output_scroll = 0,
        _ => {}
    }
}
