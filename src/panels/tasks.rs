use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::util::{panel_block, priority_style, KeyHandleResult};
use crate::ranker::Ranked;
use crate::util::Shortcut;

/// Ranked task list with a row cursor. The cursor indexes the ranked view.
pub struct TasksPanel {
    selected: usize,
    /// Visible rows (updated during render)
    page_size: usize,
}

impl Default for TasksPanel {
    fn default() -> Self {
        Self {
            selected: 0,
            page_size: 10,
        }
    }
}

impl TasksPanel {
    #[cfg(test)]
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, ranked: &[Ranked<'_>]) {
        let block = panel_block(" Today's Tasks ", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // One row is reserved for the ellipsis indicator
        self.page_size = (inner.height as usize).saturating_sub(1).max(1);

        let cursor = focused.then_some(self.selected);
        render_task_list(frame, inner, ranked, cursor);
    }

    pub fn handle_key(&mut self, key: KeyEvent, len: usize) -> KeyHandleResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected + 1 < len {
                    self.selected += 1;
                }
                KeyHandleResult::Consumed
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                KeyHandleResult::Consumed
            }
            KeyCode::PageDown => {
                if len > 0 {
                    self.selected = (self.selected + self.page_size).min(len - 1);
                }
                KeyHandleResult::Consumed
            }
            KeyCode::PageUp => {
                self.selected = self.selected.saturating_sub(self.page_size);
                KeyHandleResult::Consumed
            }
            KeyCode::Char('d' | 'x') | KeyCode::Delete if self.selected < len => {
                KeyHandleResult::Delete(self.selected)
            }
            _ => KeyHandleResult::Ignored,
        }
    }

    pub fn shortcuts() -> Vec<Shortcut> {
        vec![
            Shortcut {
                key: "j/k",
                description: "Navigate",
            },
            Shortcut {
                key: "d",
                description: "Delete",
            },
            Shortcut {
                key: "a",
                description: "Add",
            },
            Shortcut {
                key: "r/y/g",
                description: "Priority",
            },
        ]
    }

    pub fn clamp_focus(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

fn render_task_list(frame: &mut Frame, area: Rect, ranked: &[Ranked<'_>], cursor: Option<usize>) {
    if ranked.is_empty() {
        let centered = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .split(area)[0];
        let placeholder = Paragraph::new("(nothing to do)")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, centered);
        return;
    }

    let total_height = area.height as usize;
    if total_height == 0 {
        return;
    }

    let visible_height = total_height.saturating_sub(1);
    let offset = scroll_offset(ranked.len(), visible_height, cursor);
    let has_more_below = offset + visible_height < ranked.len();

    let prefix_width = 2; // "> " or "  "
    let max_text_width = (area.width as usize).saturating_sub(prefix_width + 2);

    let mut items: Vec<ListItem> = ranked
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_height)
        .map(|(i, row)| {
            let is_selected = cursor == Some(i);
            let text = format!(" {} ", truncate_with_ellipsis(&row.task.text, max_text_width));
            let mut style = priority_style(row.task.color);
            if is_selected {
                style = style.add_modifier(Modifier::BOLD);
            }
            let prefix = if is_selected {
                Span::styled("> ", Style::default().fg(Color::Cyan))
            } else {
                Span::raw("  ")
            };
            ListItem::new(Line::from(vec![prefix, Span::styled(text, style)]))
        })
        .collect();

    items.push(if has_more_below {
        ListItem::new(Line::from(Span::styled(
            "  ...",
            Style::default().fg(Color::DarkGray),
        )))
    } else {
        ListItem::new(Line::from(""))
    });

    frame.render_widget(List::new(items), area);
}

fn scroll_offset(total: usize, visible: usize, cursor: Option<usize>) -> usize {
    let Some(cursor) = cursor else { return 0 };
    if visible == 0 {
        return 0;
    }
    let max_offset = total.saturating_sub(visible);
    let margin = 2usize;
    // Keep the cursor `margin` rows away from either edge where possible
    let lowest = cursor.saturating_sub(visible.saturating_sub(margin).saturating_sub(1));
    let highest = cursor.saturating_sub(margin);
    lowest.min(max_offset).min(highest.min(max_offset))
}

fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    if max_width < 3 {
        return ".".repeat(max_width);
    }
    let limit = max_width - 3;
    let mut result = String::new();
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let result_len = result.chars().count();
        if result.is_empty() {
            if word_len > limit {
                return text.chars().take(limit).chain("...".chars()).collect();
            }
            result = word.to_string();
        } else if result_len + 1 + word_len <= limit {
            result.push(' ');
            result.push_str(word);
        } else {
            break;
        }
    }
    format!("{result}...")
}
