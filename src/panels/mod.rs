mod input;
mod tasks;
mod util;

pub use input::{InputAction, InputPanel};
pub use tasks::TasksPanel;
pub use util::KeyHandleResult;
