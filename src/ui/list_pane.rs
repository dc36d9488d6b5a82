use crate::app::AppState;
use crate::domain::{status_badge, ListRow, Task};
use crate::ui::styles::{
    border_style, default_style, done_style, group_style, pill_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Duration, location and (optionally) group pills for a task
pub fn task_pills(task: &Task, use_emoji: bool, with_group: bool) -> Vec<Span<'static>> {
    let (clock, pin, puzzle) = if use_emoji {
        ("⏱ ", "📍 ", "🧩 ")
    } else {
        ("", "@ ", "# ")
    };

    let mut spans = vec![
        Span::styled(format!("{}{} min", clock, task.duration), pill_style()),
        Span::raw("  "),
        Span::styled(format!("{}{}", pin, task.location), pill_style()),
    ];
    if with_group {
        if let Some(group) = &task.group {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(format!("{}{}", puzzle, group), pill_style()));
        }
    }
    spans
}

/// Header row for a group: label and task count
fn create_group_line(label: &str, count: usize, use_emoji: bool) -> Line<'static> {
    let label = if use_emoji {
        label.to_string()
    } else {
        label.trim_start_matches("🧩 ").to_string()
    };
    Line::from(vec![
        Span::styled(label, group_style()),
        Span::styled(format!(" ({})", count), group_style()),
    ])
}

/// Create a single line for a task
/// Format:   ⬜ Wash car  ⏱ 20 min  📍 Home  Active
fn create_task_line(task: &Task, is_current: bool, use_emoji: bool) -> Line<'static> {
    let mut spans = Vec::new();

    let marker = match (task.done, use_emoji) {
        (true, true) => "✅",
        (false, true) => "⬜",
        (true, false) => "[x]",
        (false, false) => "[ ]",
    };
    spans.push(Span::raw(format!("  {} ", marker)));

    let name_style = if task.done { done_style() } else { default_style() };
    spans.push(Span::styled(task.name.clone(), name_style));
    spans.push(Span::raw("  "));
    spans.extend(task_pills(task, use_emoji, false));
    spans.push(Span::raw("  "));

    let badge_style = if task.done { done_style() } else { default_style() };
    spans.push(Span::styled(status_badge(task).to_string(), badge_style));

    if is_current {
        spans.push(Span::styled(" ◀ current", title_style()));
    }

    Line::from(spans)
}

/// Render the task list, grouped, on the tasks screen
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let rows = app.visible_rows();
    let use_emoji = app.config.use_emoji;

    let mut selected_row = None;
    let mut task_position = 0;
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(row_index, row)| match row {
            ListRow::Group { label, count } => ListItem::new(create_group_line(label, *count, use_emoji)),
            ListRow::Task(task) => {
                let is_selected = task_position == app.selected_index;
                if is_selected {
                    selected_row = Some(row_index);
                }
                task_position += 1;

                let line = create_task_line(task, app.current_task_id == Some(task.id), use_emoji);
                let style = if is_selected { selected_style() } else { default_style() };
                ListItem::new(line).style(style)
            }
        })
        .collect();

    let shown = app.visible_tasks().len();
    let title = if app.hide_done {
        format!(" Tasks ({} shown, done hidden) ", shown)
    } else {
        format!(" Tasks ({}) ", shown)
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    let mut state = ListState::default().with_selected(selected_row);
    f.render_stateful_widget(list, area, &mut state);
}
