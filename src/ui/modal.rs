use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn yes_no_line(yes: &'static str, no: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  [y]", modal_title_style()),
        Span::raw(yes),
        Span::styled("[n]", modal_title_style()),
        Span::raw(no),
    ])
}

fn render_modal(f: &mut Frame, area: Rect, title: &'static str, lines: Vec<Line<'static>>) {
    let modal_area = create_modal_area(area, 9);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the "time is up" question
pub fn render_expired_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let name = app
        .current_task()
        .map(|t| t.name.clone())
        .unwrap_or_default();

    let lines = vec![
        Line::raw(""),
        Line::raw(format!("  ⏰ Time is up for: {}", name)),
        Line::raw(""),
        Line::raw("  Did you finish it?"),
        Line::raw(""),
        yes_no_line(" Yes, mark done  ", " Not yet"),
    ];
    render_modal(f, area, " ⏰ Time's up ", lines);
}

/// Render the wipe-all confirmation
pub fn render_wipe_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::raw(format!("  Delete ALL {} task(s)?", app.store.len())),
        Line::raw("  This can't be undone."),
        Line::raw(""),
        yes_no_line(" Wipe everything  ", " Keep them"),
    ];
    render_modal(f, area, " 🧹 Wipe all ", lines);
}
