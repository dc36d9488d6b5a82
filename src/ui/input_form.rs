use crate::app::AppState;
use crate::domain::{FormField, UiMode};
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, hint_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn input_line(value: &str, editing: bool) -> Line<'_> {
    Line::from(vec![
        Span::raw("> "),
        Span::styled(value, modal_title_style()),
        if editing {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ])
}

/// Render the add-task form
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(form) = &app.add_form else {
        return;
    };
    let modal_area = create_modal_area(area, 17);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    for field in FormField::all() {
        let editing = form.field() == *field;
        let label = if editing {
            format!("{}: (editing)", field.label())
        } else {
            format!("{}:", field.label())
        };
        lines.push(Line::raw(label));
        lines.push(input_line(form.value(*field), editing));
    }
    lines.push(Line::raw(""));

    // Validation feedback stays visible while the form is open
    if let Some(message) = &app.add_message {
        lines.push(Line::styled(message.text.clone(), error_style()));
    }
    lines.push(Line::styled(
        "Tab to switch fields  ·  Enter to add  ·  Esc to cancel",
        hint_style(),
    ));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Add Task ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the single-line prompt for custom minutes or a CSV path
pub fn render_prompt(f: &mut Frame, app: &AppState, area: Rect) {
    let (title, label) = match app.ui_mode {
        UiMode::CustomMinutes => (" ⏱ Custom spin ", "How many minutes do you have?"),
        UiMode::ImportPath => (" 📄 Import CSV ", "Path to a .csv file (name,duration,location[,group]):"),
        _ => return,
    };
    let modal_area = create_modal_area(area, 7);

    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw(label),
        input_line(&app.prompt_input, true),
        Line::raw(""),
        Line::styled("Enter to confirm  ·  Esc to cancel", hint_style()),
    ];

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
