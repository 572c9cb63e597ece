//! Task domain types shared by every crate in the workspace.

pub mod query;
pub mod stats;
pub mod task;

pub use query::{visible_tasks, Filter, SortKey, TaskQuery};
pub use stats::Stats;
pub use task::{Category, Priority, Task, TaskDraft, TaskPatch};
