use crate::app::AppState;
use crate::domain::{Screen, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Hints for the current screen and mode
fn hints(app: &AppState) -> &'static str {
    match app.ui_mode {
        UiMode::AddingTask => " Tab next field   Enter add   Esc cancel",
        UiMode::CustomMinutes | UiMode::ImportPath => " Enter ok   Esc cancel",
        UiMode::ConfirmExpired | UiMode::ConfirmWipe => " y yes   n no",
        UiMode::Normal => match app.screen {
            Screen::Choose => {
                " 1-9 quick spin   m minutes   l location   d done   s skip   Tab tasks   q quit"
            }
            Screen::Tasks => {
                " ↑/↓ select   Enter pick   d done   x delete   a add   h hide done   i import csv   W wipe   Tab spin   q quit"
            }
        },
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(hints(app))).style(hint_style());
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::AppConfig;
    use crate::store::TaskStore;

    #[test]
    fn test_hints_follow_screen_and_mode() {
        let mut app = AppState::new(TaskStore::in_memory(), AppConfig::default());
        assert!(hints(&app).contains("quick spin"));

        app.toggle_screen();
        assert!(hints(&app).contains("import csv"));

        app.ui_mode = UiMode::ConfirmWipe;
        assert_eq!(hints(&app), " y yes   n no");
    }
}
