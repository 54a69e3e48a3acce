use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};

use crate::task::Color as TaskColor;

pub fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title)
}

/// Background for a priority color with readable text on top of it.
pub fn priority_style(color: TaskColor) -> Style {
    let (bg, fg) = match color {
        TaskColor::Red => (Color::Red, Color::White),
        TaskColor::Yellow => (Color::Yellow, Color::Black),
        TaskColor::Green => (Color::Green, Color::White),
    };
    Style::default().bg(bg).fg(fg)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHandleResult {
    Consumed,
    Ignored,
    /// Delete the task shown at this row of the ranked view.
    Delete(usize),
}
