use crate::app::AppState;
use crate::timer::TimerState;
use crate::ui::layout::create_choose_layout;
use crate::ui::list_pane::task_pills;
use crate::ui::styles::{
    border_style, default_style, done_style, expired_style, hint_style, modal_title_style,
    running_style, title_style,
};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

/// Render the choose screen: spin controls and the current task
pub fn render_choose_pane(f: &mut Frame, app: &AppState, area: Rect, now: Instant) {
    let layout = create_choose_layout(area);
    render_controls(f, app, layout.controls_area);
    render_current_task(f, app, layout.current_area, now);
}

fn render_controls(f: &mut Frame, app: &AppState, area: Rect) {
    let mut lines = Vec::new();

    let location = app.location_filter.as_deref().unwrap_or("Any location");
    lines.push(Line::from(vec![
        Span::styled("Location: ", title_style()),
        Span::styled(format!("[{}]", location), modal_title_style()),
        Span::styled("  (l to change)", hint_style()),
    ]));
    lines.push(Line::raw(""));

    let mut spins = vec![Span::styled("Quick spins: ", title_style())];
    for (i, minutes) in app.config.spin_presets().iter().enumerate() {
        spins.push(Span::styled(format!("[{}]", i + 1), modal_title_style()));
        spins.push(Span::raw(format!(" {} min   ", minutes)));
    }
    spins.push(Span::styled("[m]", modal_title_style()));
    spins.push(Span::raw(" custom"));
    lines.push(Line::from(spins));

    let active = app.store.tasks().iter().filter(|t| !t.done).count();
    lines.push(Line::from(Span::styled(
        format!("{} active of {} task(s)", active, app.store.len()),
        hint_style(),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" 🎰 Spin ", title_style())),
    );
    f.render_widget(paragraph, area);
}

fn render_current_task(f: &mut Frame, app: &AppState, area: Rect, now: Instant) {
    let mut lines = Vec::new();
    lines.push(Line::raw(""));

    match (app.current_task(), &app.choose_message) {
        (_, Some(message)) => {
            lines.push(Line::raw(format!("  {}", message)));
        }
        (Some(task), None) => {
            let name_style = if task.done { done_style() } else { default_style() };
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(task.name.clone(), name_style.add_modifier(Modifier::BOLD)),
            ]));

            let mut pills = vec![Span::raw("  ")];
            pills.extend(task_pills(task, app.config.use_emoji, true));
            lines.push(Line::from(pills));
            lines.push(Line::raw(""));

            let timer_style = match app.timer.state() {
                TimerState::Running { .. } => running_style(),
                TimerState::Completed { .. } => done_style(),
                _ if app.timer.is_awaiting_confirmation() => expired_style(),
                _ => default_style(),
            };
            lines.push(Line::from(Span::styled(
                format!("  {}", app.timer_line(now)),
                timer_style,
            )));
            lines.push(Line::raw(""));

            let mut actions = Vec::new();
            if app.can_mark_current_done() {
                actions.push(Span::styled("  [d]", modal_title_style()));
                actions.push(Span::raw(" Mark done  "));
            }
            actions.push(Span::styled("  [s]", modal_title_style()));
            actions.push(Span::raw(" Skip"));
            lines.push(Line::from(actions));
        }
        (None, None) => {
            lines.push(Line::styled("  Pick a time budget and spin 🙂", hint_style()));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" 🎯 Current task ", title_style())),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
