use serde::{Deserialize, Serialize};

/// Priority tag attached to every task. Red is the most urgent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    #[default]
    Green,
}

impl Color {
    pub const ALL: [Self; 3] = [Self::Red, Self::Yellow, Self::Green];

    /// Display rank, lower sorts first.
    pub const fn priority(self) -> u8 {
        match self {
            Self::Red => 1,
            Self::Yellow => 2,
            Self::Green => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Red => Self::Yellow,
            Self::Yellow => Self::Green,
            Self::Green => Self::Red,
        }
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    pub color: Color,
}

impl Task {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Tasks in insertion order. This is the order that gets persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.0
    }

    pub(crate) fn push(&mut self, task: Task) {
        self.0.push(task);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Task {
        self.0.remove(index)
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self(tasks)
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
pub(crate) mod strategy {
    use proptest::collection::{vec, SizeRange};
    use proptest::prelude::*;

    use super::{Color, Task, TaskList};

    pub fn color() -> impl Strategy<Value = Color> {
        prop_oneof![Just(Color::Red), Just(Color::Yellow), Just(Color::Green)]
    }

    /// Non-empty text, newlines and quotes included.
    pub fn text() -> impl Strategy<Value = String> {
        "(?s).{1,24}"
    }

    pub fn task_list(len: impl Into<SizeRange>) -> impl Strategy<Value = TaskList> {
        vec((text(), color()), len)
            .prop_map(|tasks| tasks.into_iter().map(|(t, c)| Task::new(t, c)).collect())
    }
}
