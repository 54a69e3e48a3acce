use thiserror::Error;
use tracing::{debug, info};

use crate::storage::{Storage, StorageError};
use crate::task::{Color, Task, TaskList};

/// Key the task collection is stored under.
pub const TASKS_STORAGE_KEY: &str = "tasks";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("stored value under '{key}' is not a task list: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read tasks: {0}")]
    Read(#[source] StorageError),
    #[error("failed to write tasks: {0}")]
    Write(#[source] StorageError),
    #[error("failed to serialize tasks: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Reads and writes the whole task collection under a single storage key.
///
/// The store never persists on its own: callers mutate a [`TaskList`] with
/// [`add`] or [`delete`] and then call [`TaskStore::save`].
pub struct TaskStore<S> {
    storage: S,
}

impl<S: Storage> TaskStore<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the persisted list. A missing key is the first-run state and
    /// yields an empty list.
    pub fn load(&self) -> Result<TaskList, StoreError> {
        let Some(raw) = self
            .storage
            .get(TASKS_STORAGE_KEY)
            .map_err(StoreError::Read)?
        else {
            info!("no stored tasks, starting empty");
            return Ok(TaskList::new());
        };

        let list: TaskList =
            serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                key: TASKS_STORAGE_KEY,
                source,
            })?;
        info!(count = list.len(), "loaded tasks");
        Ok(list)
    }

    /// Replace the persisted list with `list`.
    pub fn save(&self, list: &TaskList) -> Result<(), StoreError> {
        let raw = serde_json::to_string(list).map_err(StoreError::Serialize)?;
        self.storage
            .set(TASKS_STORAGE_KEY, &raw)
            .map_err(StoreError::Write)?;
        debug!(count = list.len(), "saved tasks");
        Ok(())
    }
}

/// Append a task. Empty text leaves the list untouched.
pub fn add(mut list: TaskList, text: impl Into<String>, color: Color) -> TaskList {
    let text = text.into();
    if text.is_empty() {
        return list;
    }
    debug!(color = color.name(), "adding task");
    list.push(Task::new(text, color));
    list
}

/// Remove the task at storage position `index`, keeping the order of the rest.
/// An out-of-range index leaves the list untouched.
pub fn delete(mut list: TaskList, index: usize) -> TaskList {
    if index < list.len() {
        let removed = list.remove(index);
        debug!(index, color = removed.color.name(), "deleted task");
    }
    list
}
