use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::util::{panel_block, priority_style};
use crate::task::Color as TaskColor;

const PLACEHOLDER: &str = "Add a new task";

pub enum InputAction {
    Consumed,
    Dismiss,
    Submit,
    CycleColor,
}

/// The in-progress task text. Never persisted.
#[derive(Default)]
pub struct InputPanel {
    text: String,
    /// Cursor position in chars, not bytes
    cursor: usize,
}

impl InputPanel {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputAction {
        match key.code {
            KeyCode::Esc => InputAction::Dismiss,
            KeyCode::Enter => InputAction::Submit,
            KeyCode::Tab => InputAction::CycleColor,
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let at = self.byte_offset(self.cursor - 1);
                    self.text.remove(at);
                    self.cursor -= 1;
                }
                InputAction::Consumed
            }
            KeyCode::Delete => {
                if self.cursor < self.char_len() {
                    let at = self.byte_offset(self.cursor);
                    self.text.remove(at);
                }
                InputAction::Consumed
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                InputAction::Consumed
            }
            KeyCode::Right => {
                if self.cursor < self.char_len() {
                    self.cursor += 1;
                }
                InputAction::Consumed
            }
            KeyCode::Home => {
                self.cursor = 0;
                InputAction::Consumed
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                InputAction::Consumed
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let at = self.byte_offset(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
                InputAction::Consumed
            }
            _ => InputAction::Consumed,
        }
    }

    /// Input line on top, color picker underneath.
    pub fn render(&self, frame: &mut Frame, area: Rect, editing: bool, color: TaskColor) {
        let block = panel_block(" New Task ", editing);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1), // input
            Constraint::Length(1), // picker
        ])
        .split(inner);

        let style = priority_style(color);
        let input_area = rows[0];
        let available_width = input_area.width as usize;

        let scroll = self.cursor.saturating_sub(available_width.saturating_sub(1));
        let line = if self.text.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, style.add_modifier(Modifier::DIM)))
        } else {
            let visible: String = self
                .text
                .chars()
                .skip(scroll)
                .take(available_width)
                .collect();
            Line::from(Span::styled(visible, style))
        };
        if editing {
            let cursor_x = input_area.x + (self.cursor - scroll) as u16;
            if cursor_x < input_area.x + input_area.width {
                frame.set_cursor_position((cursor_x, input_area.y));
            }
        }
        frame.render_widget(Paragraph::new(line).style(style), input_area);

        render_color_picker(frame, rows[1], color);
    }
}

fn render_color_picker(frame: &mut Frame, area: Rect, selected: TaskColor) {
    let mut spans = vec![Span::styled("Priority ", Style::default().fg(Color::DarkGray))];
    for color in TaskColor::ALL {
        let marker = if color == selected { "(*)" } else { "( )" };
        spans.push(Span::styled(
            format!(" {marker} {} ", color.name()),
            priority_style(color),
        ));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(panel: &mut InputPanel, code: KeyCode) -> InputAction {
        panel.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(panel: &mut InputPanel, s: &str) {
        for c in s.chars() {
            press(panel, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut panel = InputPanel::default();
        type_str(&mut panel, "milk");
        press(&mut panel, KeyCode::Home);
        type_str(&mut panel, "Buy ");
        assert_eq!(panel.text(), "Buy milk");
    }

    #[test]
    fn backspace_handles_multibyte_chars() {
        let mut panel = InputPanel::default();
        type_str(&mut panel, "café!");
        press(&mut panel, KeyCode::Left);
        press(&mut panel, KeyCode::Backspace);
        assert_eq!(panel.text(), "caf!");
    }

    #[test]
    fn text_is_not_trimmed() {
        let mut panel = InputPanel::default();
        type_str(&mut panel, " x ");
        assert!(matches!(press(&mut panel, KeyCode::Enter), InputAction::Submit));
        assert_eq!(panel.text(), " x ");
    }

    #[test]
    fn control_chords_do_not_insert_text() {
        let mut panel = InputPanel::default();
        type_str(&mut panel, "ab");
        panel.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        panel.handle_key(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT));
        assert_eq!(panel.text(), "abC");
    }

    #[test]
    fn clear_resets_cursor() {
        let mut panel = InputPanel::default();
        type_str(&mut panel, "abc");
        panel.clear();
        type_str(&mut panel, "z");
        assert_eq!(panel.text(), "z");
    }
}
