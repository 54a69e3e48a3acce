use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};
use crate::overlays::render_help_overlay;
use crate::panels::TasksPanel;
use crate::storage::Storage;

pub struct AppLayout {
    pub input: Rect,
    pub tasks: Rect,
    pub footer: Rect,
}

pub fn create_layout(area: Rect) -> AppLayout {
    let chunks = Layout::vertical([
        Constraint::Length(4), // input + picker
        Constraint::Min(3),    // tasks
        Constraint::Length(1), // footer
    ])
    .split(area);

    AppLayout {
        input: chunks[0],
        tasks: chunks[1],
        footer: chunks[2],
    }
}

pub fn render<S: Storage>(frame: &mut Frame, app: &mut App<S>) {
    let layout = create_layout(frame.area());
    let typing = app.mode == Mode::Typing;

    app.input
        .render(frame, layout.input, typing, app.selected_color);

    // Ranked borrows the task list, so the panel is taken out while rendering
    let mut tasks_panel = std::mem::take(&mut app.tasks_panel);
    tasks_panel.render(frame, layout.tasks, !typing, &app.ranked());
    app.tasks_panel = tasks_panel;

    render_footer(frame, layout.footer, app.mode);

    if app.help_visible {
        render_help_overlay(frame, &TasksPanel::shortcuts());
    }
}

fn render_footer(frame: &mut Frame, area: Rect, mode: Mode) {
    let hints: &[(&str, &str)] = match mode {
        Mode::Browsing => &[("a", "Add"), ("d", "Delete"), ("?", "Help"), ("q", "Quit")],
        Mode::Typing => &[("Enter", "Add"), ("Tab", "Priority"), ("Esc", "Done")],
    };
    let mut spans = Vec::new();
    for (key, desc) in hints {
        spans.push(Span::styled(
            format!("[{key}]"),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::styled(
            format!(" {desc}  "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
