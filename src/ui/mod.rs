pub mod choose_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;

use crate::app::AppState;
use crate::domain::{Screen, UiMode};
use choose_pane::render_choose_pane;
use input_form::{render_input_form, render_prompt};
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::{render_expired_modal, render_wipe_modal};
use ratatui::{layout::Rect, text::Span, widgets::Paragraph, Frame};
use std::time::Instant;
use styles::{done_style, error_style, hint_style};

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let now = Instant::now();
    let layout = create_layout(size);

    render_keybindings(f, app, layout.keybindings_area);

    match app.screen {
        Screen::Choose => render_choose_pane(f, app, layout.main_area, now),
        Screen::Tasks => render_list_pane(f, app, layout.main_area),
    }

    render_status_line(f, app, layout.status_area);

    match app.ui_mode {
        UiMode::AddingTask => render_input_form(f, app, size),
        UiMode::CustomMinutes | UiMode::ImportPath => render_prompt(f, app, size),
        UiMode::ConfirmExpired => render_expired_modal(f, app, size),
        UiMode::ConfirmWipe => render_wipe_modal(f, app, size),
        UiMode::Normal => {}
    }
}

/// Bottom line: errors first, then the latest import/add message
fn render_status_line(f: &mut Frame, app: &AppState, area: Rect) {
    let span = if let Some(notice) = &app.notice {
        Span::styled(format!(" {}", notice.text), error_style())
    } else if let Some(message) = &app.csv_message {
        Span::styled(format!(" {}", message.text), done_style())
    } else if let Some(message) = app.add_message.as_ref().filter(|_| app.add_form.is_none()) {
        Span::styled(format!(" {}", message.text), done_style())
    } else {
        Span::styled(format!(" {} task(s)", app.store.len()), hint_style())
    };
    f.render_widget(Paragraph::new(span), area);
}
