use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::util::{centered_rect, shortcut_line};
use crate::util::Shortcut;

pub fn render_help_overlay(frame: &mut Frame, list_shortcuts: &[Shortcut]) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "  Tasks",
        Style::default().fg(Color::White),
    )));
    for shortcut in list_shortcuts {
        lines.push(shortcut_line(shortcut.key, shortcut.description));
    }

    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "  Typing",
        Style::default().fg(Color::White),
    )));
    let input_shortcuts = [
        ("Enter", "Add Task"),
        ("Tab", "Next Priority"),
        ("Esc", "Stop Typing"),
    ];
    for (key, desc) in input_shortcuts {
        lines.push(shortcut_line(key, desc));
    }

    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "  Global",
        Style::default().fg(Color::White),
    )));
    let global_shortcuts = [("c", "Cycle Priority"), ("?", "Toggle Help"), ("q", "Quit")];
    for (key, desc) in global_shortcuts {
        lines.push(shortcut_line(key, desc));
    }

    lines.push(Line::from(""));

    let content_height = lines.len() as u16 + 2;
    let overlay_width = 32u16;
    let overlay_area = centered_rect(frame.area(), overlay_width, content_height);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, overlay_area);
}
