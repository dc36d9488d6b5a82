use crate::app::AppState;
use crate::domain::{Screen, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Handle keyboard input events. Returns `true` when the app should quit.
///
/// Store failures are already reported as a notice by `AppState`, so they never end the session.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(true);
    }

    let now = Instant::now();
    match app.ui_mode {
        UiMode::Normal => match app.screen {
            Screen::Choose => handle_choose_screen(app, key, now),
            Screen::Tasks => handle_tasks_screen(app, key, now),
        },
        UiMode::AddingTask => handle_input_form_mode(app, key, now),
        mode if mode.is_text_entry() => handle_prompt_mode(app, key, now),
        UiMode::ConfirmExpired => handle_confirm_expired(app, key, now),
        UiMode::ConfirmWipe => handle_confirm_wipe(app, key, now),
        _ => Ok(false),
    }
}

/// Keys shared by both screens; `None` when the key wasn't one of them
fn handle_common(app: &mut AppState, key: KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(true),
        KeyCode::Tab => {
            app.toggle_screen();
            Some(false)
        }
        _ => None,
    }
}

fn handle_choose_screen(app: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    if let Some(quit) = handle_common(app, key) {
        return Ok(quit);
    }

    match key.code {
        // Quick spins
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            app.spin_preset(index, now);
        }
        KeyCode::Char('m') => app.start_custom_minutes(),
        KeyCode::Char('l') => app.cycle_location(),
        KeyCode::Char('d') => {
            app.mark_current_done(now).ok();
        }
        KeyCode::Char('s') => app.skip(),
        _ => {}
    }
    Ok(false)
}

fn handle_tasks_screen(app: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    if let Some(quit) = handle_common(app, key) {
        return Ok(quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Make the highlighted task current and go spin-side to watch its timer
        KeyCode::Enter => {
            if let Some(id) = app.selected_task_id() {
                app.select_task(id, now);
                app.screen = Screen::Choose;
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = app.selected_task_id() {
                app.mark_done(id, now).ok();
            }
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            if let Some(id) = app.selected_task_id() {
                app.delete_task(id, now).ok();
            }
        }
        KeyCode::Char('a') => app.start_add_task(),
        KeyCode::Char('h') => app.toggle_hide_done(),
        KeyCode::Char('i') => app.start_import(),
        KeyCode::Char('W') => app.request_wipe(),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the add-task form
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.cancel_input_form(),
        KeyCode::Enter => app.submit_input_form(now),
        KeyCode::Tab => app.input_form_next_field(),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Char(c) => app.input_form_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the single-line prompts (custom minutes, CSV path)
fn handle_prompt_mode(app: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.cancel_prompt(),
        KeyCode::Enter => app.submit_prompt(now),
        KeyCode::Backspace => app.prompt_backspace(),
        KeyCode::Char(c) => app.prompt_add_char(c),
        _ => {}
    }
    Ok(false)
}

fn handle_confirm_expired(app: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.resolve_expired(true, now).ok();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.resolve_expired(false, now).ok();
        }
        _ => {}
    }
    Ok(false)
}

fn handle_confirm_wipe(app: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.wipe_all(true, now).ok();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.wipe_all(false, now).ok();
        }
        _ => {}
    }
    Ok(false)
}
