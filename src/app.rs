use crossterm::event::{KeyCode, KeyEvent};
use tracing::{error, info};

use crate::panels::{InputAction, InputPanel, KeyHandleResult, TasksPanel};
use crate::ranker::{rank, Ranked};
use crate::storage::Storage;
use crate::task::{Color, TaskList};
use crate::task_store::{self, TaskStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Typing,
}

/// Application state. Every change to the task list goes through here and is
/// followed by exactly one save.
pub struct App<S> {
    pub should_quit: bool,
    pub help_visible: bool,
    pub mode: Mode,
    pub selected_color: Color,
    pub input: InputPanel,
    pub tasks_panel: TasksPanel,
    store: TaskStore<S>,
    tasks: TaskList,
}

impl<S: Storage> App<S> {
    pub fn new(store: TaskStore<S>) -> Self {
        let tasks = store.load().unwrap_or_else(|e| {
            error!(error = %e, "could not load tasks, starting with an empty list");
            TaskList::new()
        });

        Self {
            should_quit: false,
            help_visible: false,
            mode: Mode::Browsing,
            selected_color: Color::default(),
            input: InputPanel::default(),
            tasks_panel: TasksPanel::default(),
            store,
            tasks,
        }
    }

    #[cfg(test)]
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Display order of the current list.
    pub fn ranked(&self) -> Vec<Ranked<'_>> {
        rank(&self.tasks)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.help_visible {
            self.help_visible = false;
            return;
        }

        if self.mode == Mode::Typing {
            match self.input.handle_key(key) {
                InputAction::Submit => self.add_task(),
                InputAction::Dismiss => self.mode = Mode::Browsing,
                InputAction::CycleColor => self.cycle_color(),
                InputAction::Consumed => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('?') => {
                self.help_visible = true;
                return;
            }
            KeyCode::Char('a' | 'i') | KeyCode::Enter => {
                self.mode = Mode::Typing;
                return;
            }
            KeyCode::Char('r') => {
                self.select_color(Color::Red);
                return;
            }
            KeyCode::Char('y') => {
                self.select_color(Color::Yellow);
                return;
            }
            KeyCode::Char('g') => {
                self.select_color(Color::Green);
                return;
            }
            KeyCode::Char('c') | KeyCode::Tab => {
                self.cycle_color();
                return;
            }
            _ => {}
        }

        if let KeyHandleResult::Delete(row) = self.tasks_panel.handle_key(key, self.tasks.len()) {
            self.delete_ranked(row);
        }
    }

    pub fn select_color(&mut self, color: Color) {
        self.selected_color = color;
    }

    pub fn cycle_color(&mut self) {
        self.selected_color = self.selected_color.next();
    }

    /// Add the typed text with the selected color. Empty input does nothing.
    pub fn add_task(&mut self) {
        let before = self.tasks.len();
        let tasks = std::mem::take(&mut self.tasks);
        self.tasks = task_store::add(tasks, self.input.text(), self.selected_color);
        if self.tasks.len() == before {
            return;
        }
        self.input.clear();
        self.persist();
    }

    /// Delete the task shown at `row` of the ranked view.
    pub fn delete_ranked(&mut self, row: usize) {
        let Some(position) = self.ranked().get(row).map(|r| r.position) else {
            return;
        };
        let tasks = std::mem::take(&mut self.tasks);
        self.tasks = task_store::delete(tasks, position);
        self.tasks_panel.clamp_focus(self.tasks.len());
        self.persist();
    }

    /// A failed save is logged and otherwise ignored; the in-memory list stays
    /// authoritative for the rest of the session.
    fn persist(&self) {
        match self.store.save(&self.tasks) {
            Ok(()) => info!(count = self.tasks.len(), "tasks saved"),
            Err(e) => error!(error = %e, "could not save tasks"),
        }
    }
}
