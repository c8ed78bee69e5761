//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! wizard step and focus.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, DeficitFocus};
use super::event::Event;
use crate::models::InputStep;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.toggle_help();
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.toggle_help();
            return Ok(());
        }
        KeyCode::Esc => {
            app.back();
            return Ok(());
        }
        _ => {}
    }

    match app.wizard.input_step() {
        None => handle_results_key(app, key),
        Some(InputStep::Deficit) => handle_deficit_key(app, key),
        Some(_) => handle_input_key(app, key),
    }

    Ok(())
}

/// Keys on the results step
fn handle_results_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => app.reset(),
        KeyCode::Backspace | KeyCode::Left => app.back(),
        _ => {}
    }
}

/// Keys while typing into a numeric input
fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.next(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.clear();
            if let Some(step) = app.wizard.input_step() {
                app.wizard.set_input(step, None);
            }
        }
        KeyCode::Char(c) => app.type_char(c),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete(),
        KeyCode::Left if app.input.is_empty() => app.back(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_start(),
        KeyCode::End => app.input.move_end(),
        _ => {}
    }
}

/// Keys on the deficit step, where focus is on the presets or the custom entry
fn handle_deficit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.toggle_deficit_focus();
            return;
        }
        KeyCode::Enter => {
            app.next();
            return;
        }
        _ => {}
    }

    match app.deficit_focus {
        DeficitFocus::Presets => match key.code {
            KeyCode::Left | KeyCode::Char('h') => app.prev_preset(),
            KeyCode::Right | KeyCode::Char('l') => app.next_preset(),
            KeyCode::Char(' ') => app.select_preset(app.preset_cursor),
            KeyCode::Char(c) => app.type_char(c),
            _ => {}
        },
        DeficitFocus::Custom => handle_input_key(app, key),
    }
}
